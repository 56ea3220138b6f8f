use crate::client::{HosterApi, Params};
use crate::error::Error;
use crate::response::ApiResponse;

/// Managed software installation on provisioned servers.
#[derive(Debug, Clone, Copy)]
pub struct Software<'a> {
    api: &'a HosterApi,
}

impl<'a> Software<'a> {
    pub(crate) fn new(api: &'a HosterApi) -> Self {
        Self { api }
    }

    /// Returns the list of currently available software packages.
    pub async fn list(&self) -> Result<ApiResponse, Error> {
        self.api.get("software/list", Params::new()).await
    }

    /// Installs the chosen software on a server, addressed either by its
    /// id or by one of its IP addresses.
    pub async fn install(
        &self,
        server_id_or_ip: &str,
        package: &str,
        password: &str,
        port: u16,
    ) -> Result<ApiResponse, Error> {
        self.api
            .post(
                "software/install",
                Params::new()
                    .add("sid|ip", server_id_or_ip)
                    .add("package", package)
                    .add("password", password)
                    .add("port", port),
            )
            .await
    }

    /// Uninstalls the chosen software.
    pub async fn uninstall(
        &self,
        server_id_or_ip: &str,
        package: &str,
        password: &str,
        port: u16,
    ) -> Result<ApiResponse, Error> {
        self.api
            .post(
                "software/uninstall",
                Params::new()
                    .add("sid|ip", server_id_or_ip)
                    .add("package", package)
                    .add("password", password)
                    .add("port", port),
            )
            .await
    }
}
