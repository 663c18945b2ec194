use std::sync::Arc;

use crate::{
    Dashboard,
    gui::screens::{
        ScreenMessage, dashboard_page::DashboardPageScreen, loading_page::LoadingPageScreen,
    },
};

#[derive(Debug)]
pub enum Message {
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    DashboardPage(ScreenMessage<DashboardPageScreen>),
    Loaded(Result<Dashboard, Arc<anyhow::Error>>),
}
