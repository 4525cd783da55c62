//=========================================================================
// NPC Behavior Tasks
//=========================================================================
//
// Named factories for the task nodes an NPC behavior graph can place.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::registry::Registry;

//=== BehaviorTask ========================================================

/// Task instance with its default parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorTask {
    Wait { seconds: f32 },
    MoveTo { target: Option<String>, acceptance_radius: f32 },
    Restart,
    RandomBranch { branches: u32 },
}

//=== BehaviorTaskFactory =================================================

pub trait BehaviorTaskFactory {
    /// Name shown in the graph palette. Unique per registry.
    fn task_name(&self) -> &str;

    fn create_task(&self) -> BehaviorTask;
}

//--- Framework Tasks -----------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct WaitTaskFactory;

impl BehaviorTaskFactory for WaitTaskFactory {
    fn task_name(&self) -> &str {
        "Wait"
    }

    fn create_task(&self) -> BehaviorTask {
        BehaviorTask::Wait { seconds: 1.0 }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MoveToTaskFactory;

impl BehaviorTaskFactory for MoveToTaskFactory {
    fn task_name(&self) -> &str {
        "MoveTo"
    }

    fn create_task(&self) -> BehaviorTask {
        BehaviorTask::MoveTo { target: None, acceptance_radius: 5.0 }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RestartTaskFactory;

impl BehaviorTaskFactory for RestartTaskFactory {
    fn task_name(&self) -> &str {
        "Restart"
    }

    fn create_task(&self) -> BehaviorTask {
        BehaviorTask::Restart
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBranchTaskFactory;

impl BehaviorTaskFactory for RandomBranchTaskFactory {
    fn task_name(&self) -> &str {
        "RandomBranch"
    }

    fn create_task(&self) -> BehaviorTask {
        BehaviorTask::RandomBranch { branches: 2 }
    }
}

//=== Registry Lookups ====================================================

impl Registry<dyn BehaviorTaskFactory> {
    pub fn find_task(&self, name: &str) -> Option<&dyn BehaviorTaskFactory> {
        self.iter().find(|factory| factory.task_name() == name)
    }

    pub fn create_task(&self, name: &str) -> Option<BehaviorTask> {
        self.find_task(name).map(|factory| factory.create_task())
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.iter().map(|factory| factory.task_name()).collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
