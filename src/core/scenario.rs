use crate::core::array_list::CustomArrayList;
use crate::core::linked_list::CustomLinkedList;
use crate::core::report::ScenarioReport;
use crate::domain::model::{
    ErrorPolicy, Item, ListKind, Operation, OperationOutcome, OutcomeStatus, SortOrder,
};
use crate::domain::ports::CustomList;
use crate::utils::error::{ListError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Applies scripted operations to a single list and records what happened.
pub struct ScenarioRunner<L> {
    list: L,
    policy: ErrorPolicy,
    outcomes: Vec<OperationOutcome>,
}

impl<L: CustomList<Item>> ScenarioRunner<L> {
    pub fn new(list: L, policy: ErrorPolicy) -> Self {
        Self {
            list,
            policy,
            outcomes: Vec::new(),
        }
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn outcomes(&self) -> &[OperationOutcome] {
        &self.outcomes
    }

    /// Runs one operation. Failures are recorded as outcomes unless the
    /// policy is [`ErrorPolicy::Abort`], in which case they are returned.
    pub fn apply(&mut self, step: usize, operation: &Operation) -> Result<&OperationOutcome> {
        let (status, value) = match execute(&mut self.list, operation) {
            Ok(value) => (OutcomeStatus::Ok, value),
            Err(e) => {
                tracing::debug!("step {} {} failed: {}", step, operation, e);
                if self.policy == ErrorPolicy::Abort {
                    return Err(ListError::OperationError {
                        step,
                        message: format!("{}: {}", operation, e),
                    });
                }
                (OutcomeStatus::Failed, Some(e.to_string()))
            }
        };

        self.outcomes.push(OperationOutcome {
            step,
            operation: operation.to_string(),
            status,
            value,
            size_after: self.list.len(),
        });
        let index = self.outcomes.len() - 1;
        Ok(&self.outcomes[index])
    }

    pub fn run(mut self, operations: &[Operation]) -> Result<(L, Vec<OperationOutcome>)> {
        for (position, operation) in operations.iter().enumerate() {
            self.apply(position + 1, operation)?;
        }
        Ok((self.list, self.outcomes))
    }
}

fn execute<L: CustomList<Item>>(list: &mut L, operation: &Operation) -> Result<Option<String>> {
    match operation {
        Operation::Add { value } => {
            list.add(value.clone());
            Ok(None)
        }
        Operation::Insert { index, value } => {
            list.insert(*index, value.clone())?;
            Ok(None)
        }
        Operation::Get { index } => Ok(Some(list.get(*index)?.to_string())),
        Operation::Remove { value } => Ok(Some(list.remove_item(value).to_string())),
        Operation::RemoveAt { index } => Ok(Some(list.remove(*index)?.to_string())),
        Operation::Clear => {
            list.clear();
            Ok(None)
        }
        Operation::Sort { order } => {
            match order {
                SortOrder::Ascending => list.sort(),
                SortOrder::Descending => list.sort_by(|a, b| b.cmp(a)),
            }
            Ok(None)
        }
        Operation::Size => Ok(Some(list.len().to_string())),
    }
}

/// Everything needed to run one scenario against one or both list kinds.
#[derive(Debug, Clone)]
pub struct ScenarioPlan {
    pub name: String,
    pub kind: ListKind,
    pub initial_capacity: Option<usize>,
    pub policy: ErrorPolicy,
    pub operations: Vec<Operation>,
}

impl ScenarioPlan {
    fn array_list(&self) -> CustomArrayList<Item> {
        match self.initial_capacity {
            Some(capacity) => CustomArrayList::with_capacity(capacity),
            None => CustomArrayList::new(),
        }
    }

    /// Runs the plan and returns one report per implementation exercised.
    pub fn execute(&self) -> Result<Vec<ScenarioReport>> {
        tracing::info!(
            "Running scenario '{}' ({} operations) on {} list",
            self.name,
            self.operations.len(),
            self.kind
        );

        match self.kind {
            ListKind::Array => {
                let (list, outcomes) =
                    ScenarioRunner::new(self.array_list(), self.policy).run(&self.operations)?;
                Ok(vec![ScenarioReport::new(&self.name, ListKind::Array, outcomes, &list)])
            }
            ListKind::Linked => {
                let (list, outcomes) =
                    ScenarioRunner::new(CustomLinkedList::<Item>::new(), self.policy)
                        .run(&self.operations)?;
                Ok(vec![ScenarioReport::new(&self.name, ListKind::Linked, outcomes, &list)])
            }
            ListKind::Both => self.execute_cross_checked(),
        }
    }

    fn execute_cross_checked(&self) -> Result<Vec<ScenarioReport>> {
        let array = ScenarioRunner::new(self.array_list(), self.policy);
        let linked = ScenarioRunner::new(CustomLinkedList::<Item>::new(), self.policy);

        let ((array_list, array_outcomes), (linked_list, linked_outcomes)) =
            cross_check(array, linked, &self.operations)?;

        Ok(vec![
            ScenarioReport::new(&self.name, ListKind::Array, array_outcomes, &array_list),
            ScenarioReport::new(&self.name, ListKind::Linked, linked_outcomes, &linked_list),
        ])
    }
}

/// Steps two runners in lockstep. Any divergence in outcome or contents
/// stops the run with [`ListError::ConsistencyError`].
pub fn cross_check<A, B>(
    mut first: ScenarioRunner<A>,
    mut second: ScenarioRunner<B>,
    operations: &[Operation],
) -> Result<((A, Vec<OperationOutcome>), (B, Vec<OperationOutcome>))>
where
    A: CustomList<Item> + fmt::Debug,
    B: CustomList<Item> + fmt::Debug,
{
    for (position, operation) in operations.iter().enumerate() {
        let step = position + 1;
        let first_outcome = first.apply(step, operation)?.clone();
        let second_outcome = second.apply(step, operation)?;

        if &first_outcome != second_outcome {
            return Err(ListError::ConsistencyError {
                step,
                message: format!(
                    "{}: first returned {:?}, second returned {:?}",
                    operation, first_outcome.value, second_outcome.value
                ),
            });
        }
        if !first.list().content_eq(second.list()) {
            return Err(ListError::ConsistencyError {
                step,
                message: format!(
                    "{}: contents differ, {:?} vs {:?}",
                    operation,
                    first.list(),
                    second.list()
                ),
            });
        }
    }

    tracing::debug!("Both implementations agreed on all {} steps", operations.len());

    Ok(((first.list, first.outcomes), (second.list, second.outcomes)))
}
