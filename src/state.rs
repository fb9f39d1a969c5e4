use std::sync::Arc;

use minijinja::Environment;

use super::{
    config::Config,
    render,
    services::{ProductsData, ProfileData, RestClient, products::ProductsService, profile::ProfileService},
};

pub struct State {
    pub config: Config,
    pub profiles: Arc<dyn ProfileData>,
    pub products: Arc<dyn ProductsData>,
    pub templates: Environment<'static>,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let rest = RestClient::new(&config.backend_url, &config.backend_key);

        Arc::new(Self {
            profiles: Arc::new(ProfileService::new(rest.clone())),
            products: Arc::new(ProductsService::new(rest)),
            templates: render::environment(),
            config,
        })
    }
}
