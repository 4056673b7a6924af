use shared::{
    domain::ProgramId,
    protocol::{failure_message, status_message},
};
use tracing::{info, warn};

use crate::{
    error::DispatchError, output::OutputRegion, transport::RunClient, triggers::TriggerSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Succeeded,
    Failed,
}

/// Runs named programs on the server and renders the outcome into one region.
///
/// Invocations are independent: there is no correlation or cancellation, so
/// when two overlap the one whose response resolves last owns the region.
pub struct CommandDispatcher<O: OutputRegion> {
    client: RunClient,
    output: O,
}

impl<O: OutputRegion> CommandDispatcher<O> {
    pub fn new(client: RunClient, output: O) -> Self {
        Self { client, output }
    }

    pub fn client(&self) -> &RunClient {
        &self.client
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub async fn execute(&self, program: impl Into<ProgramId>) -> ExecutionOutcome {
        let request = self.client.request_for(program);

        // Written before the request goes out.
        self.output.write_status(&status_message(&request.program));
        info!(program = %request.program, method = %request.method, "executing program");

        match self.client.run(&request).await {
            Ok(response) => {
                self.output.write_result(&response.salida);
                info!(program = %request.program, bytes = response.salida.len(), "program finished");
                ExecutionOutcome::Succeeded
            }
            Err(err) => {
                warn!(program = %request.program, error = %err, "program execution failed");
                self.output.write_error(&failure_message(&err));
                ExecutionOutcome::Failed
            }
        }
    }

    /// Executes the program bound to `label`. Unknown labels touch nothing.
    pub async fn fire(
        &self,
        triggers: &TriggerSet,
        label: &str,
    ) -> Result<ExecutionOutcome, DispatchError> {
        let program = triggers.resolve(label)?.clone();
        Ok(self.execute(program).await)
    }
}
