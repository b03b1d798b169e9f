use crate::error::PollsError;
use crate::service::poll_store::PollStore;
use crate::types::{Poll, PollId, PollInput};

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, info};

/// Messages handled by the polls actor. Every variant is an RPC.
#[derive(Debug)]
pub enum PollsActorMessage {
    List(RpcReplyPort<Vec<Poll>>),
    Find(PollId, RpcReplyPort<Option<Poll>>),
    Add(PollInput, RpcReplyPort<Poll>),
    /// Add a batch in order; replies with the number stored.
    AddMany(Vec<PollInput>, RpcReplyPort<usize>),
    Update(PollId, PollInput, RpcReplyPort<bool>),
    Delete(PollId, RpcReplyPort<bool>),
}

/// Handle for interacting with the polls actor.
#[derive(Clone)]
pub struct PollsHandle {
    actor: ActorRef<PollsActorMessage>,
}

impl PollsHandle {
    pub async fn list(&self) -> Result<Vec<Poll>, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::List)
            .map_err(|e| PollsError::RactorError(format!("List RPC failed: {e}")))
    }

    pub async fn find(&self, id: PollId) -> Result<Option<Poll>, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::Find, id)
            .map_err(|e| PollsError::RactorError(format!("Find RPC failed: {e}")))
    }

    pub async fn add(&self, input: PollInput) -> Result<Poll, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::Add, input)
            .map_err(|e| PollsError::RactorError(format!("Add RPC failed: {e}")))
    }

    pub async fn add_many(&self, inputs: Vec<PollInput>) -> Result<usize, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::AddMany, inputs)
            .map_err(|e| PollsError::RactorError(format!("AddMany RPC failed: {e}")))
    }

    /// `Ok(false)` when no poll has `id`.
    pub async fn update(&self, id: PollId, input: PollInput) -> Result<bool, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::Update, id, input)
            .map_err(|e| PollsError::RactorError(format!("Update RPC failed: {e}")))
    }

    /// `Ok(false)` when no poll has `id`.
    pub async fn delete(&self, id: PollId) -> Result<bool, PollsError> {
        ractor::call!(self.actor, PollsActorMessage::Delete, id)
            .map_err(|e| PollsError::RactorError(format!("Delete RPC failed: {e}")))
    }
}

/// ractor-based owner of the application's single `PollStore`
struct PollsActor;

#[ractor::async_trait]
impl Actor for PollsActor {
    type Msg = PollsActorMessage;
    type State = PollStore;
    type Arguments = ();

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        _arguments: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        info!("PollsActor started with an empty store");
        Ok(PollStore::new())
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        store: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        // A dropped reply port only means the caller went away.
        match message {
            PollsActorMessage::List(rp) => {
                let _ = rp.send(store.list());
            }
            PollsActorMessage::Find(id, rp) => {
                let found = store.find(id);
                debug!(id, found = found.is_some(), "find");
                let _ = rp.send(found);
            }
            PollsActorMessage::Add(input, rp) => {
                let poll = store.add(input);
                info!(id = poll.id, total = store.len(), "poll created");
                let _ = rp.send(poll);
            }
            PollsActorMessage::AddMany(inputs, rp) => {
                let count = inputs.len();
                for input in inputs {
                    store.add(input);
                }
                info!(count, total = store.len(), "poll batch stored");
                let _ = rp.send(count);
            }
            PollsActorMessage::Update(id, input, rp) => {
                let updated = store.update(id, input);
                if updated {
                    info!(id, "poll updated");
                } else {
                    debug!(id, "update on missing poll");
                }
                let _ = rp.send(updated);
            }
            PollsActorMessage::Delete(id, rp) => {
                let deleted = store.delete(id);
                if deleted {
                    info!(id, total = store.len(), "poll deleted");
                } else {
                    debug!(id, "delete on missing poll");
                }
                let _ = rp.send(deleted);
            }
        }
        Ok(())
    }
}

/// Spawn an unnamed polls actor and return a handle. Unnamed so that several
/// stores can coexist in one process.
pub async fn spawn() -> Result<PollsHandle, PollsError> {
    let (actor, _jh) = Actor::spawn(None, PollsActor, ())
        .await
        .map_err(|e| PollsError::RactorError(format!("failed to spawn PollsActor: {e}")))?;
    Ok(PollsHandle { actor })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_round_trips_through_actor() {
        let handle = spawn().await.unwrap();

        let first = handle.add(PollInput::new("Poll1", "")).await.unwrap();
        let second = handle.add(PollInput::new("Poll2", "")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(handle.delete(1).await.unwrap());
        assert!(!handle.delete(1).await.unwrap());
        assert_eq!(handle.list().await.unwrap(), vec![second]);
        assert_eq!(handle.find(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn separate_spawns_have_separate_stores() {
        let a = spawn().await.unwrap();
        let b = spawn().await.unwrap();

        a.add(PollInput::new("only in a", "")).await.unwrap();
        assert_eq!(a.list().await.unwrap().len(), 1);
        assert!(b.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_through_handle() {
        let handle = spawn().await.unwrap();
        let poll = handle.add(PollInput::new("Lunch", "old")).await.unwrap();

        assert!(handle.update(poll.id, PollInput::new("Lunch", "new")).await.unwrap());
        assert!(!handle.update(42, PollInput::default()).await.unwrap());

        let found = handle.find(poll.id).await.unwrap().unwrap();
        assert_eq!(found.description, "new");
    }

    #[tokio::test]
    async fn add_many_keeps_order() {
        let handle = spawn().await.unwrap();
        let count = handle
            .add_many(vec![PollInput::new("a", ""), PollInput::new("b", "")])
            .await
            .unwrap();
        assert_eq!(count, 2);

        let titles: Vec<_> = handle
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_get_distinct_ids() {
        let handle = spawn().await.unwrap();

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..200 {
            let handle = handle.clone();
            tasks.spawn(async move { handle.add(PollInput::new(format!("Poll{i}"), "")).await });
        }

        let mut ids = std::collections::HashSet::new();
        while let Some(res) = tasks.join_next().await {
            let poll = res.unwrap().unwrap();
            assert!(ids.insert(poll.id), "id {} handed out twice", poll.id);
        }

        assert_eq!(ids.len(), 200);
        assert_eq!(handle.list().await.unwrap().len(), 200);
    }
}
