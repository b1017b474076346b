use futures::future::join_all;
use marketscope::api::{AnalyticsApi, ApiClient};
use marketscope::config::{load_config, AppConfig};
use marketscope::model::{ApiStatus, Page};
use marketscope::pages::{self, PageView};
use marketscope::state::PageSlot;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::{Mutex, Notify};
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

type SharedSlot = Arc<Mutex<PageSlot<PageView>>>;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let client = match ApiClient::new(&config.api_base_url, config.request_timeout_secs) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Failed to build API client: {:?}", e);
            return;
        }
    };

    // Connectivity status before the first page cycle
    match client.health().await {
        Ok(ApiStatus::Connected) => info!("🚀 Backend live at {}", config.api_base_url),
        _ => warn!("Backend offline; pages stay failed until it returns"),
    }

    let slots: Vec<(Page, SharedSlot)> = Page::ALL
        .iter()
        .map(|&page| (page, Arc::new(Mutex::new(PageSlot::new()))))
        .collect();

    // Manual refresh (stdin "refresh"), like the dashboard refresh button:
    // asks the backend to recompute, then refetches every page.
    let refresh_notify = Arc::new(Notify::new());
    spawn_refresh_listener(refresh_notify.clone(), client.clone());

    loop {
        info!("Entering page cycle...");
        info!("Pages to refresh: {}", slots.len());

        let tasks: Vec<_> = slots
            .iter()
            .map(|(page, slot)| process_page(*page, client.clone(), slot.clone()))
            .collect();
        join_all(tasks).await;

        info!(
            "Waiting for timer ({}s) or manual refresh...",
            config.refresh_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.refresh_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = refresh_notify.notified() => {
                info!("Manual refresh triggered.");
            }
        }
    }
}

/// Fetches one page's payload, runs its transformer and stores the
/// result, unless a newer fetch has superseded this one in the meantime.
async fn process_page(page: Page, api: Arc<ApiClient>, slot: SharedSlot) {
    let token = slot.lock().await.begin();

    info!("Fetching {}...", page.label());
    match api.fetch_page(page).await {
        Ok(raw) => {
            let view = pages::transform(page, &raw);
            let headline = view.headline();
            if slot.lock().await.complete(token, Ok(view)) {
                info!("{}: {}", page.label(), headline);
            } else {
                info!("{}: stale response discarded", page.label());
            }
        }
        Err(e) => {
            warn!("{}: fetch failed: {}", page.label(), e);
            let message = format!("Failed to load {} data", page.label().to_lowercase());
            if !slot.lock().await.complete(token, Err(message)) {
                info!("{}: stale error discarded", page.label());
            }
        }
    }
}

fn spawn_refresh_listener(notify: Arc<Notify>, client: Arc<ApiClient>) {
    tokio::spawn(async move {
        info!("▶️ Type 'refresh' to recompute and refetch.");
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().eq_ignore_ascii_case("refresh") {
                if let Err(e) = client.request_refresh().await {
                    warn!("Refresh request failed: {:?}", e);
                }
                notify.notify_one();
            }
        }
    });
}
