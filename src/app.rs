use std::sync::Arc;

use actix_web::web;

use crate::config::Config;
use crate::core::Result;
use crate::middleware::json_error_handler;
use crate::modules::ecommerce::{self, build_responder, CheckoutService};
use crate::modules::flows::services::{FlowSessionStore, ResponderSettings};
use crate::modules::gateways::{self, CardDataGateway, NpgClient};
use crate::modules::proxy::{self, ProxyForwarder};
use crate::modules::{health, wallet};

/// State shared by every worker's `App`
#[derive(Clone)]
pub struct AppState {
    pub checkout: Arc<CheckoutService>,
    pub card_data: Arc<dyn CardDataGateway>,
    pub proxy: Option<Arc<ProxyForwarder>>,
}

impl AppState {
    pub fn new(checkout: CheckoutService, card_data: Arc<dyn CardDataGateway>) -> Self {
        Self {
            checkout: Arc::new(checkout),
            card_data,
            proxy: None,
        }
    }

    pub fn with_proxy(mut self, proxy: ProxyForwarder) -> Self {
        self.proxy = Some(Arc::new(proxy));
        self
    }

    /// Build the scenario engine, the NPG client and the passthrough from config
    pub fn from_config(config: &Config) -> Result<Self> {
        let responder = build_responder(ResponderSettings {
            notification_base_url: config.flow.notification_base_url.clone(),
        });
        let sessions = FlowSessionStore::new(&config.flow.session_secret)?;
        let card_data: Arc<dyn CardDataGateway> = Arc::new(NpgClient::new(&config.npg)?);

        let state = Self::new(CheckoutService::new(responder, sessions), card_data);
        Ok(match ProxyForwarder::from_config(&config.proxy)? {
            Some(proxy) => state.with_proxy(proxy),
            None => state,
        })
    }

    /// Register shared data, every route and the fallback service
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.checkout.clone()))
            .app_data(web::Data::new(self.checkout.sessions().clone()))
            .app_data(web::Data::new(self.card_data.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler));

        if let Some(proxy) = &self.proxy {
            cfg.app_data(web::Data::from(proxy.clone()));
        }

        health::configure(cfg);
        ecommerce::controllers::configure(cfg);
        gateways::configure(cfg);
        wallet::configure(cfg);

        cfg.default_service(web::to(proxy::default_service));
    }
}
