use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use marketplace_facets::structs::app_overview::AppOverview;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;

/// Local categories endpoint. Counts hits so tests can check the fetch
/// happens at most once.
pub struct CategoriesServer {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl CategoriesServer {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let route = warp::path("categories").and(warp::get()).map(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            warp::reply::with_status(
                warp::reply::with_header(body, "content-type", "application/json"),
                status,
            )
        });

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (addr, server) = warp::serve(route).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
            shutdown_rx.await.ok();
        });
        tokio::spawn(server);

        Self {
            addr,
            hits,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/categories", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for CategoriesServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

pub fn apps(categories: &[&[&str]]) -> Arc<Vec<AppOverview>> {
    Arc::new(
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| AppOverview::new(&format!("app-{i}"), c))
            .collect(),
    )
}
