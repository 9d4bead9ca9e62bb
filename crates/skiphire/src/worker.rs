//! Background worker that fetches the catalog without blocking the UI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use reqwest::Url;
use skiphire_core::{FetchError, SkipOption};

use crate::catalog::CatalogSource;

/// Request sent to the background worker
#[derive(Debug)]
pub enum FetchRequest {
    /// Fetch the catalog at `url`, tagging the answer with `generation`
    Fetch { generation: u64, url: Url },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub struct FetchResponse {
    pub generation: u64,
    pub result: Result<Vec<SkipOption>, FetchError>,
}

/// Interface the screen controller uses to talk to a worker
pub trait FetchWorker {
    /// Queue a request. Returns false if the worker is gone.
    fn send(&self, request: FetchRequest) -> bool;

    /// Try to receive a response (non-blocking)
    fn try_recv(&self) -> Option<FetchResponse>;
}

/// Worker backed by a dedicated thread that handles one request at a time
pub struct CatalogWorker {
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
    thread: Option<JoinHandle<()>>,
    cancel_flag: Arc<AtomicBool>,
    in_flight: Arc<AtomicBool>,
}

impl CatalogWorker {
    pub fn spawn<S>(source: S) -> Self
    where
        S: CatalogSource + Send + 'static,
    {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let in_flight = Arc::new(AtomicBool::new(false));

        let ctx = WorkerContext {
            response_tx,
            cancel_flag: cancel_flag.clone(),
            in_flight: in_flight.clone(),
        };
        let thread = thread::spawn(move || ctx.run(&source, &request_rx));

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
            cancel_flag,
            in_flight,
        }
    }

    /// Stop the worker. Queued fetches that have not started are skipped.
    pub fn shutdown(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
        let _ = self.request_tx.send(FetchRequest::Shutdown);
    }

    /// Whether a catalog request is running right now
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl FetchWorker for CatalogWorker {
    fn send(&self, request: FetchRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    fn try_recv(&self) -> Option<FetchResponse> {
        self.response_rx.try_recv().ok()
    }
}

impl Drop for CatalogWorker {
    fn drop(&mut self) {
        self.shutdown();
        let Some(thread) = self.thread.take() else {
            return;
        };
        // A blocking request can't be interrupted; leave the thread to finish
        // on its own and exit with the process.
        if self.is_busy() {
            tracing::debug!("Catalog request still running, detaching worker");
            return;
        }
        let _ = thread.join();
    }
}

/// Shared state for the background worker thread.
struct WorkerContext {
    response_tx: Sender<FetchResponse>,
    cancel_flag: Arc<AtomicBool>,
    in_flight: Arc<AtomicBool>,
}

impl WorkerContext {
    fn run<S: CatalogSource>(&self, source: &S, request_rx: &Receiver<FetchRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                FetchRequest::Shutdown => break,
                FetchRequest::Fetch { generation, url } => {
                    // Mark busy before checking the flag so shutdown sees one or the other
                    self.in_flight.store(true, Ordering::SeqCst);
                    if self.cancel_flag.load(Ordering::SeqCst) {
                        self.in_flight.store(false, Ordering::SeqCst);
                        tracing::debug!(generation, "Skipping catalog fetch after shutdown");
                        break;
                    }

                    tracing::info!(generation, %url, "Fetching skip catalog");
                    let result = source.fetch(&url);
                    self.in_flight.store(false, Ordering::SeqCst);

                    match &result {
                        Ok(items) => {
                            tracing::info!(generation, count = items.len(), "Catalog fetched")
                        }
                        Err(e) => tracing::warn!(generation, error = %e, "Catalog fetch failed"),
                    }
                    if self
                        .response_tx
                        .send(FetchResponse { generation, result })
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Catalog worker stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use skiphire_core::SkipId;

    use super::*;

    /// Answers every request with one skip whose id is the query string length
    struct EchoSource;

    impl CatalogSource for EchoSource {
        fn fetch(&self, url: &Url) -> Result<Vec<SkipOption>, FetchError> {
            if url.path().ends_with("/fail") {
                return Err(FetchError::Status(500));
            }
            Ok(vec![SkipOption {
                id: SkipId(url.query().map_or(0, |q| q.len() as u64)),
                size: 4,
                hire_period_days: 14,
                price_before_vat: 278.0,
                vat: 20.0,
                allowed_on_road: true,
                allows_heavy_waste: false,
                postcode: "NR32".into(),
            }])
        }
    }

    fn wait_for(worker: &CatalogWorker) -> FetchResponse {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(response) = worker.try_recv() {
                return response;
            }
            assert!(Instant::now() < deadline, "worker did not answer");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_worker_answers_with_generation() {
        let worker = CatalogWorker::spawn(EchoSource);
        let url = Url::parse("http://localhost/api/skips/by-location?postcode=NR32").unwrap();

        assert!(worker.send(FetchRequest::Fetch { generation: 7, url }));
        let response = wait_for(&worker);

        assert_eq!(response.generation, 7);
        assert_eq!(response.result.unwrap().len(), 1);
    }

    #[test]
    fn test_worker_forwards_errors() {
        let worker = CatalogWorker::spawn(EchoSource);
        let url = Url::parse("http://localhost/fail").unwrap();

        worker.send(FetchRequest::Fetch { generation: 1, url });
        assert_eq!(wait_for(&worker).result, Err(FetchError::Status(500)));
    }

    #[test]
    fn test_worker_answers_in_order() {
        let worker = CatalogWorker::spawn(EchoSource);
        for generation in 1..=3 {
            let url = Url::parse("http://localhost/api").unwrap();
            worker.send(FetchRequest::Fetch { generation, url });
        }

        let generations: Vec<u64> = (0..3).map(|_| wait_for(&worker).generation).collect();
        assert_eq!(generations, vec![1, 2, 3]);
    }

    /// Signals when a request starts, then takes a long time to answer
    struct SlowSource {
        started: std::sync::Mutex<Sender<()>>,
    }

    impl CatalogSource for SlowSource {
        fn fetch(&self, _url: &Url) -> Result<Vec<SkipOption>, FetchError> {
            if let Ok(tx) = self.started.lock() {
                let _ = tx.send(());
            }
            thread::sleep(Duration::from_secs(3));
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_drop_during_request_does_not_block() {
        let (started_tx, started_rx) = channel();
        let worker = CatalogWorker::spawn(SlowSource {
            started: std::sync::Mutex::new(started_tx),
        });
        let url = Url::parse("http://localhost/api").unwrap();
        worker.send(FetchRequest::Fetch { generation: 1, url });
        started_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(worker.is_busy());

        let start = Instant::now();
        drop(worker);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_idle_worker_shuts_down() {
        let worker = CatalogWorker::spawn(EchoSource);
        assert!(!worker.is_busy());
        let start = Instant::now();
        drop(worker);
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
