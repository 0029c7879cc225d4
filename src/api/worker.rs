//! API Worker Thread
//!
//! Runs backend requests on a background thread with its own tokio runtime
//! so the UI loop never blocks. Requests arrive over an unbounded channel;
//! each is handled in its own task, so an export does not wait behind a slow
//! search. Results go back over a std channel polled by the UI.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::{EXPORT_FAILED, SuggestionApi};
use crate::model::SearchResponse;

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Search { keyword: String, request_id: u64 },
    Export { suggestions: Vec<String> },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone)]
pub enum ApiResponse {
    SearchCompleted {
        request_id: u64,
        keyword: String,
        response: SearchResponse,
    },
    SearchFailed {
        request_id: u64,
        message: String,
    },
    ExportCompleted {
        bytes: Vec<u8>,
    },
    ExportFailed {
        message: String,
    },
}

/// UI-side ends of the worker channels
#[derive(Debug, Default)]
pub struct ApiChannel {
    request_tx: Option<UnboundedSender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
}

impl ApiChannel {
    pub fn new(request_tx: UnboundedSender<ApiRequest>, response_rx: Receiver<ApiResponse>) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
        }
    }

    /// Queue a request. Returns false when no worker is attached.
    pub fn send(&self, request: ApiRequest) -> bool {
        match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        }
    }

    /// Drain responses that have arrived since the last poll
    pub fn poll(&self) -> Vec<ApiResponse> {
        let Some(rx) = &self.response_rx else {
            return Vec::new();
        };

        let mut responses = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("API worker disconnected");
                    break;
                }
            }
        }
        responses
    }
}

/// Create the channel pair and start the worker for `api`
pub fn spawn_worker<A: SuggestionApi>(api: A) -> ApiChannel {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start API runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(Arc::new(api), request_rx, response_tx));
    });

    ApiChannel::new(request_tx, response_rx)
}

/// Processes requests until every sender is dropped
async fn worker_loop<A: SuggestionApi>(
    api: Arc<A>,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let api = Arc::clone(&api);
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let response = handle_request(api.as_ref(), request).await;
            if response_tx.send(response).is_err() {
                log::debug!("UI dropped before response was delivered");
            }
        });
    }

    log::debug!("API worker thread shutting down");
}

async fn handle_request<A: SuggestionApi>(api: &A, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Search {
            keyword,
            request_id,
        } => {
            log::debug!("Search {} for {:?}", request_id, keyword);
            match api.fetch_suggestions(&keyword).await {
                Ok(response) => ApiResponse::SearchCompleted {
                    request_id,
                    keyword,
                    response,
                },
                Err(e) => {
                    log::debug!("Search {} failed: {:?}", request_id, e);
                    ApiResponse::SearchFailed {
                        request_id,
                        message: e.to_string(),
                    }
                }
            }
        }
        ApiRequest::Export { suggestions } => match api.export_csv(&suggestions).await {
            Ok(bytes) => ApiResponse::ExportCompleted { bytes },
            Err(e) => {
                log::debug!("Export failed: {:?}", e);
                ApiResponse::ExportFailed {
                    message: EXPORT_FAILED.to_string(),
                }
            }
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
