//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the part of the actor: it reads each request off `receiver`
/// and answers through the enclosed oneshot sender, so successes, failures
/// and missing records can be scripted deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::RestaurantClient;
    use crate::domain::{Restaurant, RestaurantPatch};
    use crate::restaurant_actor::RestaurantError;

    #[tokio::test]
    async fn test_update_forwards_patch_and_maps_missing_restaurant() {
        let (inner, mut receiver) = create_mock_client::<Restaurant>(10);
        let client = RestaurantClient::new(inner);

        let update_task = tokio::spawn(async move {
            let patch = RestaurantPatch { zip_code: Some("10001".to_string()), ..Default::default() };
            client.update_restaurant("restaurant_7".to_string(), patch).await
        });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "restaurant_7");
        assert_eq!(patch.zip_code.as_deref(), Some("10001"));
        assert!(patch.name.is_none());
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(RestaurantError::NotFound("restaurant_7".to_string())));
    }
}
