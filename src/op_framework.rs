use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::notify::NoticeSender;

// =============================================================================
// 1. THE ABSTRACTION (one trait per request/response operation)
// =============================================================================

pub type OpFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>;

/// A single authenticated request/response operation.
///
/// The framework owns the state machine and notification side effects; an
/// implementation only supplies the request itself and its notice text.
pub trait Operation: Send + Sync + 'static {
    type Input: Send + Debug + 'static;
    type Output: Clone + Send + Debug + 'static;

    fn name(&self) -> &'static str;

    /// Notice emitted once when an invocation settles successfully.
    fn on_success(&self) -> Option<&'static str> {
        None
    }

    /// Notice emitted once when an invocation settles with an error.
    fn on_failure(&self) -> Option<&'static str> {
        None
    }

    fn run(&self, input: Self::Input) -> OpFuture<Self::Output>;
}

/// Lifecycle of an operation: idle → in-flight → settled. A settled state
/// persists until the next invocation or an explicit reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpState {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

#[allow(dead_code)]
impl OpState {
    pub fn is_loading(&self) -> bool {
        matches!(self, OpState::InFlight)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OpState::Succeeded)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, OpState::Failed(_))
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, ApiError>>;

#[derive(Debug)]
pub enum OpRequest<Op: Operation> {
    Invoke {
        input: Op::Input,
        respond_to: Response<Op::Output>,
    },
    State {
        respond_to: oneshot::Sender<OpState>,
    },
    Data {
        respond_to: oneshot::Sender<Option<Op::Output>>,
    },
    Reset {
        respond_to: oneshot::Sender<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Actor owning one operation's state machine and last successful output.
///
/// Each invocation runs in its own task: rapid repeated invocations produce
/// overlapping in-flight requests, never queueing behind each other. The
/// actor observes settlements and emits at most one notice per settlement.
pub struct OperationActor<Op: Operation> {
    op: Arc<Op>,
    receiver: mpsc::Receiver<OpRequest<Op>>,
    settle_tx: mpsc::Sender<Result<Op::Output, ApiError>>,
    settle_rx: mpsc::Receiver<Result<Op::Output, ApiError>>,
    state: OpState,
    data: Option<Op::Output>,
    in_flight: usize,
    notices: NoticeSender,
}

impl<Op: Operation> OperationActor<Op> {
    pub fn new(op: Op, buffer_size: usize, notices: NoticeSender) -> (Self, OperationClient<Op>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (settle_tx, settle_rx) = mpsc::channel(buffer_size);
        let actor = Self {
            op: Arc::new(op),
            receiver,
            settle_tx,
            settle_rx,
            state: OpState::Idle,
            data: None,
            in_flight: 0,
            notices,
        };
        (actor, OperationClient { sender })
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                biased;
                Some(outcome) = self.settle_rx.recv(), if self.in_flight > 0 => {
                    self.settle(outcome).await;
                }
                msg = self.receiver.recv() => {
                    match msg {
                        Some(msg) => self.handle(msg),
                        None => break,
                    }
                }
            }
        }
        // Clients are gone; still account for outstanding invocations so
        // their notices are delivered.
        while self.in_flight > 0 {
            match self.settle_rx.recv().await {
                Some(outcome) => self.settle(outcome).await,
                None => break,
            }
        }
    }

    fn handle(&mut self, msg: OpRequest<Op>) {
        match msg {
            OpRequest::Invoke { input, respond_to } => {
                self.in_flight += 1;
                self.state = OpState::InFlight;
                debug!(op = self.op.name(), "invocation started");
                let op = self.op.clone();
                let settle = self.settle_tx.clone();
                tokio::spawn(async move {
                    let outcome = op.run(input).await;
                    let _ = settle.send(outcome.clone()).await;
                    let _ = respond_to.send(outcome);
                });
            }
            OpRequest::State { respond_to } => {
                let _ = respond_to.send(self.state.clone());
            }
            OpRequest::Data { respond_to } => {
                let _ = respond_to.send(self.data.clone());
            }
            OpRequest::Reset { respond_to } => {
                if self.in_flight == 0 {
                    self.state = OpState::Idle;
                }
                let _ = respond_to.send(());
            }
        }
    }

    async fn settle(&mut self, outcome: Result<Op::Output, ApiError>) {
        self.in_flight -= 1;
        match outcome {
            Ok(output) => {
                debug!(op = self.op.name(), "invocation succeeded");
                self.data = Some(output);
                self.state = OpState::Succeeded;
                if let Some(message) = self.op.on_success() {
                    self.notices.success(message).await;
                }
            }
            Err(e) => {
                warn!(op = self.op.name(), error = %e, "invocation failed");
                self.state = OpState::Failed(e.to_string());
                if let Some(message) = self.op.on_failure() {
                    self.notices.error(message).await;
                }
            }
        }
        if self.in_flight > 0 {
            self.state = OpState::InFlight;
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct OperationClient<Op: Operation> {
    sender: mpsc::Sender<OpRequest<Op>>,
}

impl<Op: Operation> OperationClient<Op> {
    pub fn new(sender: mpsc::Sender<OpRequest<Op>>) -> Self {
        Self { sender }
    }

    /// Invokes the operation and waits for this invocation to settle.
    pub async fn invoke(&self, input: Op::Input) -> Result<Op::Output, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OpRequest::Invoke { input, respond_to })
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    pub async fn state(&self) -> Result<OpState, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OpRequest::State { respond_to })
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor dropped".to_string()))
    }

    /// Last successful output, if any.
    pub async fn data(&self) -> Result<Option<Op::Output>, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OpRequest::Data { respond_to })
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor dropped".to_string()))
    }

    /// Returns a settled state to idle. A no-op while an invocation is in
    /// flight.
    pub async fn reset(&self) -> Result<(), ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OpRequest::Reset { respond_to })
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::ActorCommunicationError("Actor dropped".to_string()))
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
