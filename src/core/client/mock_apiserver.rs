use http::{Request, Response, StatusCode};
use kube::client::Body;
use kube::Client;
use serde_json::json;

use crate::core::client::kube_resources::Pod;

// We wrap tower_test::mock::Handle
type ApiServerHandle = tower_test::mock::Handle<Request<Body>, Response<Body>>;
pub struct ApiServerVerifier(ApiServerHandle);

pub async fn timeout_after_1s(handle: tokio::task::JoinHandle<()>) {
    tokio::time::timeout(std::time::Duration::from_secs(1), handle)
        .await
        .expect("timeout on mock apiserver")
        .expect("scenario succeeded")
}

/// Scenarios the fake apiserver can answer
pub enum Scenario {
    /// One pod list in the namespace, items named in the given order
    PodList(&'static str, Vec<&'static str>),
    /// The pod list in the namespace is rejected with 403
    Forbidden(&'static str),
}

impl ApiServerVerifier {
    /// Await the returned handle (with a timeout) so the scenario runs to completion.
    ///
    /// NB: extra calls beyond the scenario surface as `Service(Closed(()))` errors in the test.
    pub fn run(self, scenario: Scenario) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            match scenario {
                Scenario::PodList(namespace, names) => self.handle_pod_list(namespace, names).await,
                Scenario::Forbidden(namespace) => self.handle_forbidden(namespace).await,
            }
        })
    }

    async fn next_pod_list(
        mut self,
        namespace: &str,
    ) -> tower_test::mock::SendResponse<Response<Body>> {
        let (request, send) = self.0.next_request().await.expect("service not called");
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.uri().path(), format!("/api/v1/namespaces/{namespace}/pods"));
        // single unpaginated list
        let query = request.uri().query().unwrap_or_default();
        assert!(!query.contains("continue="));
        send
    }

    async fn handle_pod_list(self, namespace: &str, names: Vec<&str>) {
        let send = self.next_pod_list(namespace).await;
        let items: Vec<Pod> = names
            .iter()
            .map(|name| {
                serde_json::from_value(json!({
                    "apiVersion": "v1",
                    "kind": "Pod",
                    "metadata": { "name": name, "namespace": namespace },
                    "spec": { "containers": [{ "name": "main", "image": "test-image" }] }
                }))
                .unwrap()
            })
            .collect();
        let respdata = json!({
            "kind": "PodList",
            "apiVersion": "v1",
            "metadata": { "resourceVersion": "1" },
            "items": items,
        });
        let response = serde_json::to_vec(&respdata).unwrap(); // respond as the apiserver would have
        send.send_response(Response::builder().body(Body::from(response)).unwrap());
    }

    async fn handle_forbidden(self, namespace: &str) {
        let send = self.next_pod_list(namespace).await;
        let respdata = json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": format!(
                "pods is forbidden: User \"system:serviceaccount:default:default\" cannot list resource \"pods\" in API group \"\" in the namespace \"{namespace}\""
            ),
            "reason": "Forbidden",
            "details": { "kind": "pods" },
            "code": 403
        });
        let response = serde_json::to_vec(&respdata).unwrap();
        send.send_response(
            Response::builder()
                .status(StatusCode::FORBIDDEN)
                .body(Body::from(response))
                .unwrap(),
        );
    }
}

// Create a test context with a mocked kube client
pub fn testcontext() -> (Client, ApiServerVerifier) {
    let (mock_service, handle) = tower_test::mock::pair::<Request<Body>, Response<Body>>();
    let mock_client = Client::new(mock_service, "default");
    (mock_client, ApiServerVerifier(handle))
}
