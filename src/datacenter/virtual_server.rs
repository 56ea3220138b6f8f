use crate::client::{HosterApi, Params};
use crate::error::Error;
use crate::response::ApiResponse;

/// Virtual server provisioning, power control and backups.
#[derive(Debug, Clone, Copy)]
pub struct VirtualServer<'a> {
    api: &'a HosterApi,
}

impl<'a> VirtualServer<'a> {
    pub(crate) fn new(api: &'a HosterApi) -> Self {
        Self { api }
    }

    /// Gets the status of a VM.
    pub async fn status(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!("datacenter/server/{server_id}/status"), Params::new())
            .await
    }

    /// Gets the configuration of a VM.
    pub async fn config(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(&format!("datacenter/server/{server_id}/config"), Params::new())
            .await
    }

    /// Gets the incidents of a VM.
    pub async fn incidents(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/server/{server_id}/incidents"),
                Params::new(),
            )
            .await
    }

    /// Returns the noVNC console URL.
    pub async fn console(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/server/{server_id}/console"),
                Params::new(),
            )
            .await
    }

    /// Deletes the VM. Set `force` to delete it even while it is running.
    pub async fn delete(&self, server_id: u64, force: bool) -> Result<ApiResponse, Error> {
        self.api
            .post(
                &format!("datacenter/server/{server_id}/delete"),
                // The API reads the flag as 0/1.
                Params::new().add("force", u8::from(force)),
            )
            .await
    }

    /// Sets the reverse DNS entry for one of the VM's addresses.
    pub async fn rdns(
        &self,
        server_id: u64,
        server_ip: &str,
        hostname: &str,
    ) -> Result<ApiResponse, Error> {
        self.api
            .post(
                &format!("datacenter/server/{server_id}/rdns"),
                Params::new().add("ip", server_ip).add("hostname", hostname),
            )
            .await
    }

    /// Up- or downgrades a VM.
    ///
    /// Downgrading disk size is not allowed due to possible data loss.
    pub async fn change(
        &self,
        server_id: u64,
        cores: u32,
        memory: u32,
        disk: &str,
        ip_addresses: u32,
    ) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/change"),
                Params::new()
                    .add("cpuCores", cores)
                    .add("mem", memory)
                    .add("disk", disk)
                    .add("ipCount", ip_addresses),
            )
            .await
    }

    /// Starts a VM.
    pub async fn start(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(&format!("datacenter/server/{server_id}/start"), Params::new())
            .await
    }

    /// Gracefully stops a VM.
    pub async fn stop(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/shutdown"),
                Params::new(),
            )
            .await
    }

    /// Forcefully stops a VM.
    pub async fn force_stop(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(&format!("datacenter/server/{server_id}/stop"), Params::new())
            .await
    }

    /// Gracefully restarts a VM.
    pub async fn reboot(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(&format!("datacenter/server/{server_id}/reboot"), Params::new())
            .await
    }

    /// Forcefully restarts a VM.
    pub async fn force_reboot(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/reboot/force"),
                Params::new(),
            )
            .await
    }

    /// Reinstalls a VM with the given template.
    pub async fn reinstall(&self, server_id: u64, template: &str) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/reinstall"),
                Params::new().add("template", template),
            )
            .await
    }

    /// Resets the VM's root password.
    pub async fn reset_password(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/password/reset"),
                Params::new(),
            )
            .await
    }

    /// Lists the VM's backups.
    pub async fn backup_list(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/server/{server_id}/backups/list"),
                Params::new(),
            )
            .await
    }

    /// Returns the backup status.
    pub async fn backup_status(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .get(
                &format!("datacenter/server/{server_id}/backups/status"),
                Params::new(),
            )
            .await
    }

    /// Creates a backup of the VM.
    pub async fn create_backup(&self, server_id: u64) -> Result<ApiResponse, Error> {
        self.api
            .put(
                &format!("datacenter/server/{server_id}/backups/create"),
                Params::new(),
            )
            .await
    }

    /// Restores the VM to the given backup.
    pub async fn restore(&self, server_id: u64, backup: u64) -> Result<ApiResponse, Error> {
        self.api
            .post(
                &format!("datacenter/server/{server_id}/backups/restore"),
                Params::new().add("backup", backup),
            )
            .await
    }

    /// Creates a VM with the given parameters.
    pub async fn create(
        &self,
        template: &str,
        cores: u32,
        memory: u32,
        disk: &str,
        ip_addresses: u32,
    ) -> Result<ApiResponse, Error> {
        self.api
            .post(
                "datacenter/server",
                Params::new()
                    .add("template", template)
                    // sic: the server only understands the misspelled field.
                    .add("cupCores", cores)
                    .add("mem", memory)
                    .add("disk", disk)
                    .add("ipCount", ip_addresses),
            )
            .await
    }

    /// Lists your currently owned VMs.
    pub async fn list(&self) -> Result<ApiResponse, Error> {
        self.api.get("datacenter/server", Params::new()).await
    }

    /// Returns the list of currently available install templates.
    pub async fn templates(&self) -> Result<ApiResponse, Error> {
        self.api.get("datacenter/templates", Params::new()).await
    }
}
