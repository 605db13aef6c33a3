use httpmock::Method::{
    DELETE,
    GET,
};
use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};
use serde::Serialize;
use serde_json::json;
use tk_api::{
    GROUP,
    TASK_LABEL_KEY,
};

pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<Box<dyn Fn(When, Then)>>,
    mock_ids: Vec<usize>,
}

fn print_req(req: &HttpMockRequest) -> bool {
    // Use println instead of info! so that this works outside of the lib crate
    println!("    Received: {} {}", req.method(), req.uri().path());
    true
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn assert(&self) {
        for id in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert()
        }
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handlers.push(Box::new(move |w, t| {
            let w = w.matches(print_req);
            f(w, t);
        }));
        self
    }

    pub fn handle_not_found(&mut self, path: String) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(404).json_body(status_not_found());
        })
    }

    pub fn handle_api_groups(&mut self, versions: &[&str]) -> &mut Self {
        let body = tekton_api_group_list(versions);
        self.handle(move |when, then| {
            when.method(GET).path("/apis");
            then.json_body(body.clone());
        })
    }

    pub fn handle_list_cluster_tasks<T: Serialize>(&mut self, version: &str, items: &[T]) -> &mut Self {
        let path = cluster_tasks_path(version);
        let body = list_body(version, "ClusterTaskList", items);
        self.handle(move |when, then| {
            when.method(GET).path(&path);
            then.json_body(body.clone());
        })
    }

    // The apiserver filters by label before returning the list, so callers should only pass in
    // the runs that carry the task label for `task_name`
    pub fn handle_list_task_runs<T: Serialize>(
        &mut self,
        version: &str,
        ns: &str,
        task_name: &str,
        items: &[T],
    ) -> &mut Self {
        let path = task_runs_path(version, ns);
        let selector = format!("{TASK_LABEL_KEY}={task_name}");
        let body = list_body(version, "TaskRunList", items);
        self.handle(move |when, then| {
            when.method(GET).path(&path).query_param("labelSelector", &selector);
            then.json_body(body.clone());
        })
    }

    pub fn handle_delete_cluster_task(&mut self, version: &str, name: &str) -> &mut Self {
        let path = format!("{}/{name}", cluster_tasks_path(version));
        self.handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.json_body(status_ok());
        })
    }

    pub fn handle_delete_cluster_task_not_found(&mut self, version: &str, name: &str) -> &mut Self {
        let path = format!("{}/{name}", cluster_tasks_path(version));
        let body = status_not_found_for("clustertasks", name);
        self.handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.status(404).json_body(body.clone());
        })
    }

    pub fn handle_delete_task_run(&mut self, version: &str, ns: &str, name: &str) -> &mut Self {
        let path = format!("{}/{name}", task_runs_path(version, ns));
        self.handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.json_body(status_ok());
        })
    }

    pub fn handle_delete_task_run_not_found(&mut self, version: &str, ns: &str, name: &str) -> &mut Self {
        let path = format!("{}/{name}", task_runs_path(version, ns));
        let body = status_not_found_for("taskruns", name);
        self.handle(move |when, then| {
            when.method(DELETE).path(&path);
            then.status(404).json_body(body.clone());
        })
    }

    pub fn build(&mut self) {
        for f in self.handlers.iter() {
            self.mock_ids.push(self.server.mock(f).id);
        }

        // Print all unmatched/unhandled requests for easier debugging;
        // this has to go last so that the other mock rules have a chance
        // to match first
        self.server.mock(|when, _| {
            when.matches(print_req);
        });
    }

    pub fn url(&self) -> http::Uri {
        http::Uri::try_from(self.server.url("/")).unwrap()
    }
}

impl Default for MockServerBuilder {
    fn default() -> MockServerBuilder {
        MockServerBuilder::new()
    }
}

pub fn make_fake_apiserver() -> (MockServerBuilder, kube::Client) {
    let builder = MockServerBuilder::new();
    let config = kube::Config::new(builder.url());
    let client = kube::Client::try_from(config).unwrap();
    (builder, client)
}

pub fn cluster_tasks_path(version: &str) -> String {
    format!("/apis/{GROUP}/{version}/clustertasks")
}

pub fn task_runs_path(version: &str, ns: &str) -> String {
    format!("/apis/{GROUP}/{version}/namespaces/{ns}/taskruns")
}

pub fn list_body<T: Serialize>(version: &str, kind: &str, items: &[T]) -> serde_json::Value {
    json!({
        "kind": kind,
        "apiVersion": format!("{GROUP}/{version}"),
        "metadata": {"resourceVersion": "1234"},
        "items": items,
    })
}

pub fn tekton_api_group_list(versions: &[&str]) -> serde_json::Value {
    let versions: Vec<_> = versions
        .iter()
        .map(|v| json!({"groupVersion": format!("{GROUP}/{v}"), "version": v}))
        .collect();
    json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": [
            {
                "name": "apps",
                "versions": [{"groupVersion": "apps/v1", "version": "v1"}],
                "preferredVersion": {"groupVersion": "apps/v1", "version": "v1"},
            },
            {
                "name": GROUP,
                "versions": versions,
            },
        ],
    })
}

pub fn status_ok() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Success",
      "code": 200
    })
}

pub fn status_not_found() -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "reason": "NotFound",
      "code": 404
    })
}

// What a real apiserver sends back for a missing object
pub fn status_not_found_for(plural: &str, name: &str) -> serde_json::Value {
    json!({
      "kind": "Status",
      "apiVersion": "v1",
      "metadata": {},
      "status": "Failure",
      "message": not_found_message(plural, name),
      "reason": "NotFound",
      "details": {"name": name, "group": GROUP, "kind": plural},
      "code": 404
    })
}

pub fn not_found_message(plural: &str, name: &str) -> String {
    format!("{plural}.{GROUP} \"{name}\" not found")
}
