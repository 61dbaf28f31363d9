//! Optimize workflow orchestration.
//!
//! Runs the `optimize` pipeline without printing anything, so it can be
//! driven programmatically or by the CLI. The stages are strictly linear and
//! the first failure ends the run:
//!
//! 1. **Load credential** from the [`CredentialStore`]
//! 2. **Locate files** (Dockerfile, .dockerignore, package.json)
//! 3. **Build request** and **call the service** through [`OptimizeService`]
//! 4. **Apply results** into `dockershrink.optimised/`
//!
//! Progress reporting and presenting the results are left to the caller,
//! which runs the stages one by one (see [`run_optimize`]).
//!
//! [`run_optimize`]: crate::cmd::optimize::run_optimize
//!
//! # Examples
//!
//! ```no_run
//! use dockershrink::api::ApiClient;
//! use dockershrink::cmd::workflow::OptimizeWorkflow;
//! use dockershrink::config::{FileCredentialStore, OptimizeOptions};
//!
//! let store = FileCredentialStore::user_default()?;
//! let client = ApiClient::from_env()?;
//! let workflow = OptimizeWorkflow::new(".", &store, &client);
//! let options = OptimizeOptions::default();
//!
//! let credential = workflow.load_credential()?;
//! let inputs = workflow.locate(&options)?;
//! let response = workflow.submit(&credential, &inputs, &options)?;
//! let written = workflow.apply(&response)?;
//! println!("{} file(s) written", written.len());
//! # Ok::<(), dockershrink::error::DockershrinkError>(())
//! ```

use log::debug;
use std::path::{Path, PathBuf};

use crate::api::{OptimizationResponse, OptimizeService};
use crate::config::{CredentialStore, OptimizeOptions};
use crate::error::DockershrinkError;
use crate::output::ResultApplier;
use crate::project::{FileLocator, OptimizationRequest, ProjectInputs};

/// Optimize pipeline bound to a project root and its collaborators
pub struct OptimizeWorkflow<'a> {
    project_root: PathBuf,
    credentials: &'a dyn CredentialStore,
    service: &'a dyn OptimizeService,
}

impl<'a> OptimizeWorkflow<'a> {
    /// Create a workflow for the project at `project_root`
    pub fn new(
        project_root: impl Into<PathBuf>,
        credentials: &'a dyn CredentialStore,
        service: &'a dyn OptimizeService,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            credentials,
            service,
        }
    }

    /// Project the workflow operates on
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Stage 1: read the API key
    pub fn load_credential(&self) -> Result<String, DockershrinkError> {
        self.credentials.load()
    }

    /// Stage 2: find the three input files
    pub fn locate(&self, options: &OptimizeOptions) -> Result<ProjectInputs, DockershrinkError> {
        FileLocator::new(&self.project_root).locate_all(options)
    }

    /// Stage 3: build the request and send it
    pub fn submit(
        &self,
        credential: &str,
        inputs: &ProjectInputs,
        options: &OptimizeOptions,
    ) -> Result<OptimizationResponse, DockershrinkError> {
        let request = OptimizationRequest::build(inputs.clone(), options.openai_api_key());
        self.service.optimize(credential, &request)
    }

    /// Stage 4: write returned files
    pub fn apply(
        &self,
        response: &OptimizationResponse,
    ) -> Result<Vec<PathBuf>, DockershrinkError> {
        let written = ResultApplier::new(&self.project_root).apply(&response.modified_project)?;
        debug!("optimize finished, {} file(s) written", written.len());
        Ok(written)
    }
}
