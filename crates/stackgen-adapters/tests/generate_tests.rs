//! Integration tests for the generation workflow: core service wired to
//! the concrete adapters.

use std::path::Path;

use tempfile::TempDir;

use stackgen_adapters::{BundledTemplates, LocalFilesystem, MemoryFilesystem};
use stackgen_core::{
    application::{ApplicationError, GenerateService, ports::Filesystem},
    domain::{BuiltinTemplate, GenerationRequest, TemplateSelector},
    error::StackgenError,
};

const ARTIFACTS: [&str; 6] = [
    "docker-compose.yml",
    ".env",
    "server/Dockerfile",
    "server/requirements.txt",
    "server/__init__.py",
    "server/app.py",
];

fn memory_service() -> (GenerateService, MemoryFilesystem) {
    let filesystem = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(filesystem.clone()), Box::new(BundledTemplates::new()));
    (service, filesystem)
}

fn request(target: &str) -> GenerationRequest {
    GenerationRequest::builder(target, TemplateSelector::parse("default:simple"))
        .build()
        .unwrap()
}

#[test]
fn fresh_target_receives_exactly_the_six_artifacts() {
    let (service, fs) = memory_service();
    service.generate(&request("/out/proj")).unwrap();

    let mut written = fs.list_files();
    written.sort();
    let mut expected: Vec<_> = ARTIFACTS
        .iter()
        .map(|rel| Path::new("/out/proj").join(rel))
        .collect();
    expected.sort();
    assert_eq!(written, expected);

    for rel in ARTIFACTS {
        let content = fs.read_file(&Path::new("/out/proj").join(rel)).unwrap();
        if rel == "server/__init__.py" {
            assert!(content.is_empty(), "package marker must be exactly empty");
        } else {
            assert!(!content.is_empty(), "{rel} must be non-empty");
        }
    }
}

#[test]
fn non_empty_target_aborts_before_any_write() {
    let (service, fs) = memory_service();
    fs.seed_file("/out/proj/stale.txt", b"leftover");

    let err = service.generate(&request("/out/proj")).unwrap_err();
    assert!(matches!(
        err,
        StackgenError::Application(ApplicationError::DirectoryNotEmpty { .. })
    ));

    // Zero writes: the pre-existing file is still the only one.
    assert_eq!(fs.list_files().len(), 1);
}

#[test]
fn builtin_simple_copies_exact_payload_bytes() {
    let (service, fs) = memory_service();
    service.generate(&request("/out/proj")).unwrap();

    let copied = fs.read_file(Path::new("/out/proj/server/app.py")).unwrap();
    assert_eq!(
        copied,
        BundledTemplates::builtin_payload(BuiltinTemplate::Simple).as_bytes()
    );
}

#[test]
fn user_template_path_copies_that_files_bytes() {
    let temp = TempDir::new().unwrap();
    let template_path = temp.path().join("custom.py");
    std::fs::write(&template_path, b"print('custom')\n").unwrap();

    let (service, fs) = memory_service();
    let req = GenerationRequest::builder(
        "/out/proj",
        TemplateSelector::File(template_path),
    )
    .build()
    .unwrap();
    service.generate(&req).unwrap();

    assert_eq!(
        fs.read_file(Path::new("/out/proj/server/app.py")).unwrap(),
        b"print('custom')\n"
    );
}

#[test]
fn missing_template_surfaces_after_composed_artifacts() {
    let (service, fs) = memory_service();
    let req = GenerationRequest::builder(
        "/out/proj",
        TemplateSelector::parse("/nonexistent/template.py"),
    )
    .build()
    .unwrap();

    let err = service.generate(&req).unwrap_err();
    assert!(matches!(
        err,
        StackgenError::Application(ApplicationError::TemplateNotFound { .. })
    ));

    // The template copy is last: the five composed artifacts were written
    // and are left in place (no rollback).
    assert_eq!(fs.list_files().len(), 5);
    assert!(!fs.exists(Path::new("/out/proj/server/app.py")));
}

#[test]
fn supplied_parameters_flow_into_env_and_compose() {
    let (service, fs) = memory_service();
    let req = GenerationRequest::builder("/tmp/proj1", TemplateSelector::parse("default:simple"))
        .database_port(27018)
        .http_port(9090)
        .database_user("u")
        .database_password("p")
        .api_key("k1")
        .build()
        .unwrap();
    service.generate(&req).unwrap();

    let env = String::from_utf8(fs.read_file(Path::new("/tmp/proj1/.env")).unwrap()).unwrap();
    assert!(env.contains("DB_PORT=27018\n"));
    assert!(env.contains("DB_USER=u\n"));
    assert!(env.contains("DB_PASS=p\n"));
    assert!(env.contains("SERVER_API_KEY=k1\n"));

    let compose =
        String::from_utf8(fs.read_file(Path::new("/tmp/proj1/docker-compose.yml")).unwrap())
            .unwrap();
    assert!(compose.contains("- 27018:27017"));
    assert!(compose.contains("- 9090:8080"));
}

#[test]
fn generation_is_reproducible() {
    let (first, fs_first) = memory_service();
    let (second, fs_second) = memory_service();

    first.generate(&request("/out/proj")).unwrap();
    second.generate(&request("/out/proj")).unwrap();

    for rel in ARTIFACTS {
        let path = Path::new("/out/proj").join(rel);
        assert_eq!(
            fs_first.read_file(&path),
            fs_second.read_file(&path),
            "{rel} differs between identical runs"
        );
    }
}

#[test]
fn local_filesystem_end_to_end() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("proj");

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BundledTemplates::new()),
    );
    let req = GenerationRequest::builder(&target, TemplateSelector::parse("default:multiple"))
        .build()
        .unwrap();
    service.generate(&req).unwrap();

    for rel in ARTIFACTS {
        assert!(target.join(rel).exists(), "{rel} missing on disk");
    }
    assert_eq!(
        std::fs::read(target.join("server/app.py")).unwrap(),
        BundledTemplates::builtin_payload(BuiltinTemplate::Multiple).as_bytes()
    );
    assert_eq!(
        std::fs::read(target.join("server/__init__.py")).unwrap(),
        b""
    );
}

#[test]
fn local_filesystem_rejects_non_empty_target() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("existing.txt"), "x").unwrap();

    let service = GenerateService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BundledTemplates::new()),
    );
    let req = GenerationRequest::builder(temp.path(), TemplateSelector::parse("default:simple"))
        .build()
        .unwrap();

    assert!(matches!(
        service.generate(&req).unwrap_err(),
        StackgenError::Application(ApplicationError::DirectoryNotEmpty { .. })
    ));
    // Nothing was written next to the existing file.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
}
