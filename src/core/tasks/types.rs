use crate::core::{
    Card,
    SwipeError,
};

#[derive(Debug)]
pub enum TaskResult {
    BatchLoaded { generation: u64, result: Result<Vec<Card>, SwipeError> },
    SettleElapsed { generation: u64 },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::BatchLoaded { .. } => "batch_loaded",
            TaskResult::SettleElapsed { .. } => "settle_elapsed",
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            TaskResult::BatchLoaded { generation, .. } => *generation,
            TaskResult::SettleElapsed { generation } => *generation,
        }
    }
}
