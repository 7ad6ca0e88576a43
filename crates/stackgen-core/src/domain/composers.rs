//! Artifact composers.
//!
//! Each composer is a pure function of the relevant subset of
//! [`GenerationRequest`] fields, producing one textual artifact and its
//! relative output path. Composition is deterministic: identical inputs
//! give byte-identical output, with no timestamps and no random elements.
//!
//! The service/port/image names, the env-file key names, and the relative
//! paths in [`paths`] are a compatibility surface: operators running the
//! generated files depend on these exact names.

use crate::domain::GenerationRequest;

/// Relative output paths beneath the target directory.
pub mod paths {
    /// Build-context subdirectory, created before any artifact write.
    pub const SERVER_DIR: &str = "server";

    pub const ORCHESTRATION_FILE: &str = "docker-compose.yml";
    pub const ENV_FILE: &str = ".env";
    pub const BUILD_FILE: &str = "server/Dockerfile";
    pub const DEPENDENCY_MANIFEST: &str = "server/requirements.txt";
    pub const PACKAGE_MARKER: &str = "server/__init__.py";
    pub const APPLICATION_ENTRY: &str = "server/app.py";
}

/// Internal container port the database service listens on.
const DATABASE_INTERNAL_PORT: u16 = 27017;
/// Internal container port the HTTP service listens on.
const HTTP_INTERNAL_PORT: u16 = 8080;

/// One generated file: a relative path beneath the target directory plus
/// its full textual content.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Artifact {
    pub relative_path: &'static str,
    pub content: String,
}

/// The orchestration description: a database service and an application
/// service, both sourcing their environment from the env file.
pub fn orchestration(request: &GenerationRequest) -> Artifact {
    let database_port = request.database_port();
    let http_port = request.http_port();
    let content = format!(
        "version: '3.7'\n\
         services:\n\
         \x20 mongodb:\n\
         \x20   image: mongo:6.0\n\
         \x20   env_file: .env\n\
         \x20   ports:\n\
         \x20     - {database_port}:{DATABASE_INTERNAL_PORT}\n\
         \x20   expose:\n\
         \x20     - {database_port}\n\
         \x20   volumes:\n\
         \x20     - .tmp/mongo:/data/db\n\
         \x20 http:\n\
         \x20   build:\n\
         \x20     context: ./server\n\
         \x20   env_file: .env\n\
         \x20   ports:\n\
         \x20     - {http_port}:{HTTP_INTERNAL_PORT}\n\
         \x20   expose:\n\
         \x20     - {http_port}\n"
    );
    Artifact {
        relative_path: paths::ORCHESTRATION_FILE,
        content,
    }
}

/// The environment file: database bootstrap credentials, connection
/// parameters, the API key, and fixed runtime-server constants. Values are
/// inserted verbatim, without quoting or escaping.
pub fn environment(request: &GenerationRequest) -> Artifact {
    let content = format!(
        "MONGO_INITDB_ROOT_USERNAME={user}\n\
         MONGO_INITDB_ROOT_PASSWORD={password}\n\
         DB_HOST=mongodb\n\
         DB_PORT={port}\n\
         DB_USER={user}\n\
         DB_PASS={password}\n\
         SERVER_API_KEY={api_key}\n\
         WAITRESS_PORT={HTTP_INTERNAL_PORT}\n\
         MODULE_NAME=app\n\
         VARIABLE_NAME=app\n",
        user = request.database_user(),
        password = request.database_password(),
        port = request.database_port(),
        api_key = request.api_key(),
    );
    Artifact {
        relative_path: paths::ENV_FILE,
        content,
    }
}

/// The container build recipe. Fixed content.
pub fn build_file() -> Artifact {
    Artifact {
        relative_path: paths::BUILD_FILE,
        content: "FROM tecktron/python-waitress:python-3.7\n\
                  \n\
                  COPY ./ /app\n\
                  RUN pip install -r /app/requirements.txt\n\
                  # The /app/app.py file will be the entrypoint for waitress serve.\n"
            .into(),
    }
}

/// The dependency manifest pinning the storage framework. Fixed content;
/// exists so the generated project is self-contained for rebuilds.
pub fn dependency_manifest() -> Artifact {
    Artifact {
        relative_path: paths::DEPENDENCY_MANIFEST,
        content: "# Place any requirements you need in this file.\n\
                  alephvault-http-mongodb-storage==0.0.4\n"
            .into(),
    }
}

/// The package marker: exactly empty, marks `server/` as importable.
pub fn package_marker() -> Artifact {
    Artifact {
        relative_path: paths::PACKAGE_MARKER,
        content: String::new(),
    }
}

/// All composed artifacts in write order. The application entry point is
/// not included; it is copied from the template, not composed.
pub fn all(request: &GenerationRequest) -> Vec<Artifact> {
    vec![
        orchestration(request),
        environment(request),
        build_file(),
        dependency_manifest(),
        package_marker(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateSelector;

    fn request() -> GenerationRequest {
        GenerationRequest::builder("/tmp/proj", TemplateSelector::parse("default:simple"))
            .build()
            .unwrap()
    }

    #[test]
    fn orchestration_publishes_configured_ports() {
        let req = GenerationRequest::builder("/t", TemplateSelector::parse("default:simple"))
            .database_port(27018)
            .http_port(9090)
            .build()
            .unwrap();
        let artifact = orchestration(&req);
        assert_eq!(artifact.relative_path, "docker-compose.yml");
        assert!(artifact.content.contains("- 27018:27017"));
        assert!(artifact.content.contains("- 9090:8080"));
        assert!(artifact.content.contains("image: mongo:6.0"));
        assert!(artifact.content.contains("context: ./server"));
    }

    #[test]
    fn orchestration_default_output_is_stable() {
        let expected = "version: '3.7'\n\
                        services:\n\
                        \x20 mongodb:\n\
                        \x20   image: mongo:6.0\n\
                        \x20   env_file: .env\n\
                        \x20   ports:\n\
                        \x20     - 27017:27017\n\
                        \x20   expose:\n\
                        \x20     - 27017\n\
                        \x20   volumes:\n\
                        \x20     - .tmp/mongo:/data/db\n\
                        \x20 http:\n\
                        \x20   build:\n\
                        \x20     context: ./server\n\
                        \x20   env_file: .env\n\
                        \x20   ports:\n\
                        \x20     - 8080:8080\n\
                        \x20   expose:\n\
                        \x20     - 8080\n";
        assert_eq!(orchestration(&request()).content, expected);
    }

    #[test]
    fn environment_reflects_supplied_values_exactly() {
        let req = GenerationRequest::builder("/t", TemplateSelector::parse("default:simple"))
            .database_port(27018)
            .database_user("u")
            .database_password("p")
            .api_key("k1")
            .build()
            .unwrap();
        let content = environment(&req).content;
        assert!(content.contains("MONGO_INITDB_ROOT_USERNAME=u\n"));
        assert!(content.contains("MONGO_INITDB_ROOT_PASSWORD=p\n"));
        assert!(content.contains("DB_HOST=mongodb\n"));
        assert!(content.contains("DB_PORT=27018\n"));
        assert!(content.contains("DB_USER=u\n"));
        assert!(content.contains("DB_PASS=p\n"));
        assert!(content.contains("SERVER_API_KEY=k1\n"));
        assert!(content.contains("WAITRESS_PORT=8080\n"));
        assert!(content.contains("MODULE_NAME=app\n"));
        assert!(content.contains("VARIABLE_NAME=app\n"));
    }

    #[test]
    fn composition_is_deterministic() {
        let req = request();
        assert_eq!(orchestration(&req), orchestration(&req));
        assert_eq!(environment(&req), environment(&req));
        assert_eq!(build_file(), build_file());
        assert_eq!(dependency_manifest(), dependency_manifest());
    }

    #[test]
    fn package_marker_is_exactly_empty() {
        assert!(package_marker().content.is_empty());
    }

    #[test]
    fn all_yields_five_artifacts_at_distinct_paths() {
        let artifacts = all(&request());
        assert_eq!(artifacts.len(), 5);
        let mut seen: Vec<_> = artifacts.iter().map(|a| a.relative_path).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn fixed_artifacts_pin_the_expected_stack() {
        assert!(build_file().content.starts_with("FROM tecktron/python-waitress"));
        assert!(
            dependency_manifest()
                .content
                .contains("alephvault-http-mongodb-storage==0.0.4")
        );
    }
}
