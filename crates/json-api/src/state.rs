//! State

use std::sync::Arc;

use has_one_product_app::{configuration::urls::RequestContext, context::AppContext};

use crate::auth::AdminToken;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) admin_token: AdminToken,

    /// Where configuration page links point.
    pub(crate) links: RequestContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, admin_token: AdminToken, links: RequestContext) -> Self {
        Self {
            app,
            admin_token,
            links,
        }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, admin_token: AdminToken, links: RequestContext) -> Arc<Self> {
        Arc::new(Self::new(app, admin_token, links))
    }
}
