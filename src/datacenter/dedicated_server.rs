use crate::client::{HosterApi, Params};
use crate::error::Error;
use crate::response::ApiResponse;

/// Dedicated server market, provisioning and power control.
#[derive(Debug, Clone, Copy)]
pub struct DedicatedServer<'a> {
    api: &'a HosterApi,
}

impl<'a> DedicatedServer<'a> {
    pub(crate) fn new(api: &'a HosterApi) -> Self {
        Self { api }
    }

    /// Returns the machines currently offered on the market.
    pub async fn market(&self) -> Result<ApiResponse, Error> {
        self.api.get("datacenter/dedicated/market", Params::new()).await
    }

    /// Orders a dedicated server from the market.
    pub async fn order(
        &self,
        server_id: u64,
        template: &str,
        ip_count: u32,
        hostname: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .post(
                "datacenter/dedicated/order",
                Params::new()
                    .add("id", server_id)
                    .add("template", template)
                    .add("ipCount", ip_count)
                    .add("hostname", hostname),
            )
            .await
    }

    /// Returns the list of currently available install templates.
    pub async fn templates(&self) -> Result<ApiResponse, Error> {
        self.api
            .get("datacenter/dedicated/templates", Params::new())
            .await
    }

    /// Lists your currently owned dedicated servers.
    pub async fn list(&self) -> Result<ApiResponse, Error> {
        self.api.get("datacenter/dedicated", Params::new()).await
    }

    /// Starts a dedicated server.
    pub async fn start(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(&format!("datacenter/dedicated/{server_id}/start"), Params::new())
            .await
    }

    /// Gracefully stops a dedicated server.
    pub async fn stop(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/dedicated/{server_id}/shutdown"),
                Params::new(),
            )
            .await
    }

    /// Restarts a dedicated server.
    pub async fn restart(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/dedicated/{server_id}/reboot"),
                Params::new(),
            )
            .await
    }

    /// Reinstalls a dedicated server with the given template.
    pub async fn reinstall(
        &self,
        server_id: u64,
        template: &str,
        hostname: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/dedicated/{server_id}/reinstall"),
                Params::new().add("template", template).add("hostname", hostname),
            )
            .await
    }

    /// Returns the noVNC console URL.
    pub async fn console(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/dedicated/{server_id}/console"),
                Params::new(),
            )
            .await
    }

    /// Gets the current status of the dedicated server.
    pub async fn status(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/dedicated/{server_id}/status"),
                Params::new(),
            )
            .await
    }

    /// Gets the configuration of the dedicated server.
    pub async fn config(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/dedicated/{server_id}/config"),
                Params::new(),
            )
            .await
    }

    /// Terminates the dedicated server.
    ///
    /// This immediately deletes the machine and revokes all access to it.
    pub async fn terminate(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .post(
                &format!("datacenter/dedicated/{server_id}/terminate"),
                Params::new(),
            )
            .await
    }
}
