//! Controllers for every portal resource, wired from configuration.

use satudata_client::{HttpTransport, PortalConfig};
use satudata_core::{Resource, ResourceEndpoints};
use satudata_error::SatuDataResult;
use satudata_interface::{AuthProvider, Transport};
use satudata_portal::{
    AkunKepalaDinas, Book, Opd, TrxSektoral, Urusan, User, akun, book, opd, trx_sektoral, urusan,
    user,
};
use satudata_resource::{ResourceController, ResourceSpec};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Entry point to the portal backend.
///
/// Holds one transport and one session; each accessor builds a fresh
/// controller for a resource using the endpoints configured for it.
#[derive(Clone)]
pub struct Portal {
    config: PortalConfig,
    transport: Arc<dyn Transport>,
    auth: Arc<dyn AuthProvider>,
}

impl std::fmt::Debug for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portal")
            .field("base_url", self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl Portal {
    /// Connect over HTTP using the configured base URL and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: PortalConfig) -> SatuDataResult<Self> {
        let auth = Arc::new(config.session());
        let transport = Arc::new(HttpTransport::new(config.clone())?);
        Ok(Self::with_transport(config, transport, auth))
    }

    /// Use an explicit transport and session.
    pub fn with_transport(
        config: PortalConfig,
        transport: Arc<dyn Transport>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            config,
            transport,
            auth,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    fn controller<T: Resource>(
        &self,
        name: &str,
        spec: fn(ResourceEndpoints) -> ResourceSpec<T>,
    ) -> SatuDataResult<ResourceController<T>> {
        let endpoints = self.config.endpoints(name)?.clone();
        debug!(resource = name, list = %endpoints.list(), "Creating controller");
        Ok(ResourceController::new(
            spec(endpoints),
            Arc::clone(&self.transport),
            Arc::clone(&self.auth),
        ))
    }

    /// Regional government units.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn opd(&self) -> SatuDataResult<ResourceController<Opd>> {
        self.controller(opd::NAME, opd::spec)
    }

    /// Government affairs classification.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn urusan(&self) -> SatuDataResult<ResourceController<Urusan>> {
        self.controller(urusan::NAME, urusan::spec)
    }

    /// Digital library books.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn buku(&self) -> SatuDataResult<ResourceController<Book>> {
        self.controller(book::NAME, book::spec)
    }

    /// Head-of-agency accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn akun_kepala_dinas(&self) -> SatuDataResult<ResourceController<AkunKepalaDinas>> {
        self.controller(akun::NAME, akun::spec)
    }

    /// Sectoral statistics transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn trx_sektoral(&self) -> SatuDataResult<ResourceController<TrxSektoral>> {
        self.controller(trx_sektoral::NAME, trx_sektoral::spec)
    }

    /// Staff users.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource has no configured endpoints.
    pub fn users(&self) -> SatuDataResult<ResourceController<User>> {
        self.controller(user::NAME, user::spec)
    }
}
