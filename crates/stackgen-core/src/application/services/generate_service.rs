//! Generate Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Create the target directory and verify the empty-directory precondition
//! 2. Create the build-context subdirectory
//! 3. Write each composed artifact in sequence
//! 4. Resolve the template and copy its bytes last
//!
//! Writes are sequential and non-atomic: a failure at step N leaves the
//! artifacts from steps 1..N-1 in place and the caller owns cleanup. The
//! empty-directory check is the only overwrite guard. Callers must not run
//! two generations against the same target concurrently.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSource},
    },
    domain::{GenerationRequest, composers, paths},
    error::StackgenResult,
};

/// Main generation service.
///
/// Holds the injected driven ports; a [`GenerationRequest`] arrives already
/// validated by its builder.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Box<dyn TemplateSource>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Materialize the full artifact set for `request`.
    ///
    /// This is the main use case. Produces, relative to the target:
    ///
    /// ```text
    /// docker-compose.yml
    /// .env
    /// server/Dockerfile
    /// server/requirements.txt
    /// server/__init__.py
    /// server/app.py
    /// ```
    #[instrument(
        skip_all,
        fields(
            target = %request.target_path().display(),
            template = %request.template(),
        )
    )]
    pub fn generate(&self, request: &GenerationRequest) -> StackgenResult<()> {
        let target = request.target_path();

        // 1. Precondition: the target must be freshly created or empty.
        self.prepare_target(target)?;

        // 2. Build context. Must precede every artifact write.
        self.filesystem
            .create_dir_all(&target.join(paths::SERVER_DIR))?;

        // 3. Composed artifacts, in order.
        for artifact in composers::all(request) {
            debug!(path = artifact.relative_path, "writing artifact");
            self.filesystem
                .write_file(&target.join(artifact.relative_path), artifact.content.as_bytes())?;
        }

        // 4. Application entry point: copied bytes, written last by
        //    convention (no composer reads it).
        let payload = self.templates.resolve(request.template())?;
        self.filesystem
            .write_file(&target.join(paths::APPLICATION_ENTRY), &payload)?;

        info!("generation complete");
        Ok(())
    }

    /// Create the target directory tree and enforce the empty-directory
    /// precondition before any artifact is written.
    fn prepare_target(&self, target: &Path) -> StackgenResult<()> {
        self.filesystem.create_dir_all(target)?;

        if !self.filesystem.dir_is_empty(target)? {
            return Err(ApplicationError::DirectoryNotEmpty {
                path: target.to_path_buf(),
            }
            .into());
        }

        Ok(())
    }
}
