//! In-memory stand-in for the Stratos management API.
//!
//! Resources are kept as raw `serde_json::Value` documents keyed by their
//! identifier field, so the mock never shares types with the client crate.
//! Some responses are wrapped in a single-key envelope and some are bare,
//! matching what the real server does.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put, MethodRouter},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Resource collections stored as id-keyed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Cartridge,
    Partition,
    AutoscalingPolicy,
    DeploymentPolicy,
    KubernetesCluster,
    Tenant,
    User,
    Service,
    ServiceGroup,
    Application,
}

impl Kind {
    fn id_field(self) -> &'static str {
        match self {
            Kind::Cartridge => "type",
            Kind::Partition | Kind::AutoscalingPolicy | Kind::DeploymentPolicy => "id",
            Kind::KubernetesCluster => "groupId",
            Kind::Tenant => "tenantDomain",
            Kind::User => "userName",
            Kind::Service => "cartridgeType",
            Kind::ServiceGroup => "name",
            Kind::Application => "applicationId",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Kind::Cartridge => "Cartridge",
            Kind::Partition => "Partition",
            Kind::AutoscalingPolicy => "Autoscaling policy",
            Kind::DeploymentPolicy => "Deployment policy",
            Kind::KubernetesCluster => "Kubernetes cluster",
            Kind::Tenant => "Tenant",
            Kind::User => "User",
            Kind::Service => "Service",
            Kind::ServiceGroup => "Service group",
            Kind::Application => "Application",
        }
    }

    /// Envelope key of list responses; `None` means a bare array.
    fn list_envelope(self) -> Option<&'static str> {
        match self {
            Kind::Cartridge => Some("cartridges"),
            Kind::AutoscalingPolicy => Some("autoscalePolicies"),
            Kind::Tenant => Some("tenants"),
            Kind::Service => Some("services"),
            Kind::Application => Some("applications"),
            _ => None,
        }
    }

    /// Envelope key of single-item responses; `None` means a bare object.
    fn item_envelope(self) -> Option<&'static str> {
        match self {
            Kind::Partition => Some("partition"),
            Kind::AutoscalingPolicy => Some("autoscalePolicy"),
            Kind::DeploymentPolicy => Some("deploymentPolicy"),
            Kind::ServiceGroup => Some("serviceGroup"),
            _ => None,
        }
    }
}

/// Backing data of the mock.
#[derive(Debug, Default)]
pub struct Store {
    collections: HashMap<Kind, BTreeMap<String, Value>>,
    clusters: BTreeMap<String, Value>,
    subscriptions: BTreeMap<String, Vec<String>>,
    metadata: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    next_tenant_id: i64,
}

impl Store {
    /// Register the topology returned for a subscription alias.
    pub fn seed_cluster(&mut self, alias: &str, cluster: Value) {
        self.clusters.insert(alias.to_string(), cluster);
    }

    /// Subscribe a tenant to an already deployed cartridge type.
    pub fn seed_subscription(&mut self, tenant_id: &str, cartridge_type: &str) {
        self.subscriptions
            .entry(tenant_id.to_string())
            .or_default()
            .push(cartridge_type.to_string());
    }

    pub fn insert(&mut self, kind: Kind, document: Value) {
        if let Some(id) = document.get(kind.id_field()).and_then(Value::as_str) {
            self.collections
                .entry(kind)
                .or_default()
                .insert(id.to_string(), document);
        }
    }

    fn collection(&mut self, kind: Kind) -> &mut BTreeMap<String, Value> {
        self.collections.entry(kind).or_default()
    }
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    expected_auth: Arc<str>,
}

impl AppState {
    pub fn new(store: Store, username: &str, password: &str) -> Self {
        let token = STANDARD.encode(format!("{username}:{password}"));
        Self {
            store: Arc::new(RwLock::new(store)),
            expected_auth: Arc::from(format!("Basic {token}")),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::default(), DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

pub fn app() -> Router {
    app_with(AppState::default())
}

pub fn app_with(state: AppState) -> Router {
    let api = Router::new()
        .route("/init", get(|| async { Json(json!({})) }))
        .route("/cartridges", collection(Kind::Cartridge))
        .route("/cartridges/{id}", item(Kind::Cartridge))
        .route("/subscriptions/{tenant}/cartridges", get(tenant_cartridges))
        .route("/partitions", collection(Kind::Partition))
        .route("/partitions/{id}", item(Kind::Partition))
        .route("/autoscalingPolicies", collection(Kind::AutoscalingPolicy))
        .route("/autoscalingPolicies/{id}", item(Kind::AutoscalingPolicy))
        .route(
            "/autoscalePolicies",
            put(|State(state): State<AppState>, Json(body): Json<Value>| async move {
                replace_document(&state, Kind::AutoscalingPolicy, body).await
            }),
        )
        .route("/deploymentPolicies", collection(Kind::DeploymentPolicy))
        .route("/deploymentPolicies/{id}", item(Kind::DeploymentPolicy))
        .route("/kubernetesCluster", collection(Kind::KubernetesCluster))
        .route("/kubernetesCluster/{id}", item(Kind::KubernetesCluster))
        .route("/kubernetesCluster/{id}/hosts", get(list_hosts))
        .route("/kubernetesCluster/{id}/hosts/{host}", delete(remove_host))
        .route("/kubernetesCluster/{id}/minion", put(add_host))
        .route("/kubernetesCluster/{id}/minion/{host}", put(replace_host))
        .route("/kubernetesCluster/{id}/master", get(get_master).put(replace_master))
        .route(
            "/tenants",
            get(|State(state): State<AppState>| async move {
                list_documents(&state, Kind::Tenant).await
            })
            .post(create_tenant),
        )
        .route("/tenants/{id}", item(Kind::Tenant))
        .route("/tenants/activate/{domain}", post(activate_tenant))
        .route("/tenants/deactivate/{domain}", post(deactivate_tenant))
        .route("/users", collection(Kind::User))
        .route("/users/{id}", item(Kind::User))
        .route("/services", collection(Kind::Service))
        .route("/services/{id}", item(Kind::Service))
        .route("/groups", collection(Kind::ServiceGroup))
        .route("/groups/{id}", item(Kind::ServiceGroup))
        .route("/applications", collection(Kind::Application))
        .route("/applications/{id}", item(Kind::Application))
        .route("/clusters/{alias}", get(get_cluster))
        .route("/repo/synchronize/{alias}", post(synchronize))
        .route("/subscriptions/{alias}/properties", put(update_subscription_properties));

    let metadata = Router::new().route(
        "/application/{app}/properties",
        get(list_metadata).post(add_metadata),
    );

    Router::new()
        .nest("/api/v4.1", api)
        .nest("/metadata/api", metadata)
        .layer(middleware::from_fn_with_state(state.clone(), require_basic_auth))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

/// Server error body in the shape the real API produces.
pub fn error_body(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "Error": {
            "errorCode": status.as_u16(),
            "errorMessage": message,
        }
    });
    (status, Json(body)).into_response()
}

async fn require_basic_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == &*state.expected_auth);
    if !authorized {
        tracing::warn!(path = %request.uri().path(), "rejected request without valid credentials");
        return error_body(StatusCode::UNAUTHORIZED, "Authentication failed");
    }
    next.run(request).await
}

fn enveloped(key: Option<&str>, payload: Value) -> Value {
    match key {
        Some(key) => json!({ (key): payload }),
        None => payload,
    }
}

fn collection(kind: Kind) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move { list_documents(&state, kind).await })
        .post(move |State(state): State<AppState>, Json(body): Json<Value>| async move {
            create_document(&state, kind, body).await
        })
        .put(move |State(state): State<AppState>, Json(body): Json<Value>| async move {
            replace_document(&state, kind, body).await
        })
}

fn item(kind: Kind) -> MethodRouter<AppState> {
    get(
        move |State(state): State<AppState>, Path(id): Path<String>| async move {
            get_document(&state, kind, &id).await
        },
    )
    .delete(
        move |State(state): State<AppState>, Path(id): Path<String>| async move {
            delete_document(&state, kind, &id).await
        },
    )
}

async fn list_documents(state: &AppState, kind: Kind) -> Response {
    let mut store = state.store.write().await;
    let items: Vec<Value> = store
        .collection(kind)
        .values()
        .cloned()
        .map(|doc| redact(kind, doc))
        .collect();
    Json(enveloped(kind.list_envelope(), Value::Array(items))).into_response()
}

async fn create_document(state: &AppState, kind: Kind, body: Value) -> Response {
    let Some(id) = body.get(kind.id_field()).and_then(Value::as_str).map(str::to_string) else {
        let message = format!("{} definition is missing '{}'", kind.label(), kind.id_field());
        return error_body(StatusCode::BAD_REQUEST, &message);
    };
    let mut store = state.store.write().await;
    let documents = store.collection(kind);
    if documents.contains_key(&id) {
        let message = format!("{} {id} already exists", kind.label());
        return error_body(StatusCode::CONFLICT, &message);
    }
    let mut body = body;
    if kind == Kind::Application {
        if let Some(map) = body.as_object_mut() {
            map.entry("status").or_insert_with(|| json!("Created"));
        }
    }
    tracing::debug!(kind = kind.label(), %id, "created");
    documents.insert(id, body);
    StatusCode::CREATED.into_response()
}

async fn replace_document(state: &AppState, kind: Kind, body: Value) -> Response {
    let Some(id) = body.get(kind.id_field()).and_then(Value::as_str).map(str::to_string) else {
        let message = format!("{} definition is missing '{}'", kind.label(), kind.id_field());
        return error_body(StatusCode::BAD_REQUEST, &message);
    };
    let mut store = state.store.write().await;
    match store.collection(kind).get_mut(&id) {
        Some(existing) => {
            *existing = body;
            StatusCode::OK.into_response()
        }
        None => not_found(kind, &id),
    }
}

async fn get_document(state: &AppState, kind: Kind, id: &str) -> Response {
    let mut store = state.store.write().await;
    match store.collection(kind).get(id).cloned() {
        Some(doc) => Json(enveloped(kind.item_envelope(), redact(kind, doc))).into_response(),
        None => not_found(kind, id),
    }
}

async fn delete_document(state: &AppState, kind: Kind, id: &str) -> Response {
    let mut store = state.store.write().await;
    match store.collection(kind).remove(id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(kind, id),
    }
}

fn not_found(kind: Kind, id: &str) -> Response {
    error_body(StatusCode::NOT_FOUND, &format!("{} not found: {id}", kind.label()))
}

/// Secrets are accepted on create but never echoed back.
fn redact(kind: Kind, mut doc: Value) -> Value {
    if let Some(map) = doc.as_object_mut() {
        match kind {
            Kind::User => {
                map.remove("credential");
            }
            Kind::Tenant => {
                map.remove("adminPassword");
            }
            _ => {}
        }
    }
    doc
}

async fn create_tenant(State(state): State<AppState>, Json(mut body): Json<Value>) -> Response {
    let Some(domain) = body.get("tenantDomain").and_then(Value::as_str).map(str::to_string) else {
        return error_body(StatusCode::BAD_REQUEST, "Tenant definition is missing 'tenantDomain'");
    };
    let mut store = state.store.write().await;
    if store.collection(Kind::Tenant).contains_key(&domain) {
        return error_body(StatusCode::CONFLICT, &format!("Tenant {domain} already exists"));
    }
    store.next_tenant_id += 1;
    let tenant_id = store.next_tenant_id;
    if let Some(map) = body.as_object_mut() {
        map.insert("tenantId".to_string(), json!(tenant_id));
        map.entry("active").or_insert(json!(false));
    }
    store.collection(Kind::Tenant).insert(domain, body);
    StatusCode::CREATED.into_response()
}

async fn set_tenant_active(state: &AppState, domain: &str, active: bool) -> Response {
    let mut store = state.store.write().await;
    match store.collection(Kind::Tenant).get_mut(domain).and_then(Value::as_object_mut) {
        Some(tenant) => {
            tenant.insert("active".to_string(), json!(active));
            StatusCode::OK.into_response()
        }
        None => not_found(Kind::Tenant, domain),
    }
}

async fn activate_tenant(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    set_tenant_active(&state, &domain, true).await
}

async fn deactivate_tenant(State(state): State<AppState>, Path(domain): Path<String>) -> Response {
    set_tenant_active(&state, &domain, false).await
}

async fn tenant_cartridges(State(state): State<AppState>, Path(tenant): Path<String>) -> Response {
    let mut store = state.store.write().await;
    let subscribed = store.subscriptions.get(&tenant).cloned().unwrap_or_default();
    let cartridges = store.collection(Kind::Cartridge);
    let items: Vec<Value> = subscribed
        .iter()
        .filter_map(|t| cartridges.get(t).cloned())
        .collect();
    Json(Value::Array(items)).into_response()
}

fn hosts_of(cluster: &mut Value) -> Option<&mut Vec<Value>> {
    let map = cluster.as_object_mut()?;
    map.entry("kubernetesHosts")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
}

fn host_id(host: &Value) -> Option<&str> {
    host.get("hostId").and_then(Value::as_str)
}

async fn list_hosts(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut store = state.store.write().await;
    match store.collection(Kind::KubernetesCluster).get_mut(&id).and_then(hosts_of) {
        Some(hosts) => Json(Value::Array(hosts.clone())).into_response(),
        None => not_found(Kind::KubernetesCluster, &id),
    }
}

async fn add_host(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(host): Json<Value>,
) -> Response {
    let Some(new_id) = host_id(&host).map(str::to_string) else {
        return error_body(StatusCode::BAD_REQUEST, "Kubernetes host is missing 'hostId'");
    };
    let mut store = state.store.write().await;
    let Some(hosts) = store.collection(Kind::KubernetesCluster).get_mut(&id).and_then(hosts_of) else {
        return not_found(Kind::KubernetesCluster, &id);
    };
    if hosts.iter().any(|h| host_id(h) == Some(new_id.as_str())) {
        return error_body(StatusCode::CONFLICT, &format!("Kubernetes host {new_id} already exists"));
    }
    hosts.push(host);
    StatusCode::OK.into_response()
}

async fn replace_host(
    State(state): State<AppState>,
    Path((id, host)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = state.store.write().await;
    let Some(hosts) = store.collection(Kind::KubernetesCluster).get_mut(&id).and_then(hosts_of) else {
        return not_found(Kind::KubernetesCluster, &id);
    };
    match hosts.iter_mut().find(|h| host_id(h) == Some(host.as_str())) {
        Some(existing) => {
            *existing = body;
            StatusCode::OK.into_response()
        }
        None => error_body(StatusCode::NOT_FOUND, &format!("Kubernetes host not found: {host}")),
    }
}

async fn remove_host(
    State(state): State<AppState>,
    Path((id, host)): Path<(String, String)>,
) -> Response {
    let mut store = state.store.write().await;
    let Some(hosts) = store.collection(Kind::KubernetesCluster).get_mut(&id).and_then(hosts_of) else {
        return not_found(Kind::KubernetesCluster, &id);
    };
    let before = hosts.len();
    hosts.retain(|h| host_id(h) != Some(host.as_str()));
    if hosts.len() == before {
        return error_body(StatusCode::NOT_FOUND, &format!("Kubernetes host not found: {host}"));
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn get_master(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut store = state.store.write().await;
    let Some(cluster) = store.collection(Kind::KubernetesCluster).get(&id) else {
        return not_found(Kind::KubernetesCluster, &id);
    };
    match cluster.get("kubernetesMaster") {
        Some(master) => Json(json!({ "kubernetesMaster": master })).into_response(),
        None => error_body(StatusCode::NOT_FOUND, &format!("Kubernetes master not found: {id}")),
    }
}

async fn replace_master(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(master): Json<Value>,
) -> Response {
    let mut store = state.store.write().await;
    match store
        .collection(Kind::KubernetesCluster)
        .get_mut(&id)
        .and_then(Value::as_object_mut)
    {
        Some(cluster) => {
            cluster.insert("kubernetesMaster".to_string(), master);
            StatusCode::OK.into_response()
        }
        None => not_found(Kind::KubernetesCluster, &id),
    }
}

async fn get_cluster(State(state): State<AppState>, Path(alias): Path<String>) -> Response {
    let store = state.store.read().await;
    match store.clusters.get(&alias) {
        Some(cluster) => Json(json!({ "cluster": cluster })).into_response(),
        None => error_body(StatusCode::NOT_FOUND, &format!("Cluster not found for alias: {alias}")),
    }
}

async fn synchronize(State(state): State<AppState>, Path(alias): Path<String>) -> Response {
    let store = state.store.read().await;
    if store.clusters.contains_key(&alias) {
        StatusCode::OK.into_response()
    } else {
        error_body(StatusCode::NOT_FOUND, &format!("Subscription not found: {alias}"))
    }
}

async fn update_subscription_properties(
    State(state): State<AppState>,
    Path(alias): Path<String>,
    Json(properties): Json<Value>,
) -> Response {
    if !properties.is_array() {
        return error_body(StatusCode::BAD_REQUEST, "Expected an array of properties");
    }
    let mut store = state.store.write().await;
    match store.clusters.get_mut(&alias).and_then(Value::as_object_mut) {
        Some(cluster) => {
            cluster.insert("property".to_string(), properties);
            StatusCode::OK.into_response()
        }
        None => error_body(StatusCode::NOT_FOUND, &format!("Subscription not found: {alias}")),
    }
}

async fn list_metadata(State(state): State<AppState>, Path(app): Path<String>) -> Response {
    let store = state.store.read().await;
    let properties: Vec<Value> = store
        .metadata
        .get(&app)
        .map(|props| {
            props
                .iter()
                .map(|(key, values)| json!({ "key": key, "values": values }))
                .collect()
        })
        .unwrap_or_default();
    Json(json!({ "properties": properties })).into_response()
}

async fn add_metadata(
    State(state): State<AppState>,
    Path(app): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Response {
    let Some(key) = body.get("key").and_then(Value::as_str) else {
        return error_body(StatusCode::BAD_REQUEST, "Metadata property is missing 'key'");
    };
    let values: Vec<String> = body
        .get("values")
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();
    let mut store = state.store.write().await;
    store
        .metadata
        .entry(app)
        .or_default()
        .entry(key.to_string())
        .or_default()
        .extend(values);
    StatusCode::CREATED.into_response()
}
