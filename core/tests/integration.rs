//! End-to-end lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises the core client
//! operations over real HTTP using ureq. Validates that request building and
//! response parsing agree with the server's paths, status codes, envelopes
//! and error bodies.

use mock_server::{AppState, Store};
use serde_json::json;
use stratos_core::types::{
    AutoscalePolicy, CartridgeDefinition, DeploymentPolicy, KubernetesCluster, KubernetesHost,
    MetadataProperty, Partition, Property, TenantInfo, UserInfo,
};
use stratos_core::{
    ApiError, Credentials, Definition, HttpMethod, HttpRequest, HttpResponse, StratosClient,
};

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => with_headers(agent.get(&req.path), &req.headers).call(),
        HttpMethod::Delete => with_headers(agent.delete(&req.path), &req.headers).call(),
        HttpMethod::Post | HttpMethod::Put => {
            let builder = if req.method == HttpMethod::Post {
                agent.post(&req.path)
            } else {
                agent.put(&req.path)
            };
            let builder = with_headers(builder, &req.headers);
            match &req.body {
                Some(body) => builder.send(body.as_bytes()),
                None => builder.send_empty(),
            }
        }
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    HttpResponse::new(status, body)
}

/// Start the mock on a random port with the given store; returns its base URL.
fn start_server(store: Store) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, AppState::new(store, "admin", "admin")).await
        })
    });

    format!("http://{addr}")
}

fn admin_client(base: &str) -> StratosClient {
    StratosClient::new(base).with_credentials(Credentials::new("admin", "admin"))
}

#[test]
fn session_requires_valid_credentials() {
    let base = start_server(Store::default());

    let c = admin_client(&base);
    c.parse_init(execute(c.build_init())).unwrap();

    let anonymous = StratosClient::new(&base);
    let err = anonymous.parse_init(execute(anonymous.build_init())).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401 }), "got {err:?}");

    let wrong = StratosClient::new(&base).with_credentials(Credentials::new("admin", "nope"));
    let err = wrong.parse_init(execute(wrong.build_init())).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
}

#[test]
fn cartridge_lifecycle() {
    let base = start_server(Store::default());
    let c = admin_client(&base);

    // Empty list decodes from the enveloped empty array.
    let cartridges = c.parse_list_cartridges(execute(c.build_list_cartridges())).unwrap();
    assert!(cartridges.is_empty());

    let php = CartridgeDefinition {
        cartridge_type: "php".into(),
        category: Some("framework".into()),
        display_name: Some("PHP".into()),
        version: Some("7".into()),
        ..Default::default()
    };
    let definition = Definition::from(php.clone());
    let req = c.build_deploy_cartridge(&definition).unwrap();
    c.parse_created(execute(req)).unwrap();

    // Deploying the same type again surfaces the server's message.
    let req = c.build_deploy_cartridge(&definition).unwrap();
    let err = c.parse_created(execute(req)).unwrap_err();
    assert_eq!(err.to_string(), "Cartridge php already exists");
    assert_eq!(err.status(), Some(409));

    let described = c
        .parse_describe_cartridge(execute(c.build_describe_cartridge()), "php")
        .unwrap();
    assert_eq!(described, php);

    let err = c
        .parse_describe_cartridge(execute(c.build_describe_cartridge()), "ruby")
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    c.parse_deleted(execute(c.build_undeploy_cartridge("php"))).unwrap();
    let err = c
        .parse_deleted(execute(c.build_undeploy_cartridge("php")))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn tenant_subscriptions_reflect_seeded_store() {
    let mut store = Store::default();
    store.insert(mock_server::Kind::Cartridge, json!({"type": "mysql", "category": "data"}));
    store.seed_subscription("-1234", "mysql");
    let base = start_server(store);
    let c = admin_client(&base);

    let subscribed = c
        .parse_list_tenant_cartridges(execute(c.build_list_tenant_cartridges("-1234")))
        .unwrap();
    assert_eq!(subscribed.len(), 1);
    assert_eq!(subscribed[0].cartridge_type, "mysql");

    let none = c
        .parse_list_tenant_cartridges(execute(c.build_list_tenant_cartridges("42")))
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn partition_and_policy_lifecycle() {
    let base = start_server(Store::default());
    let c = admin_client(&base);

    let partition = Partition {
        id: "P1".into(),
        provider: Some("ec2".into()),
        property: vec![Property::new("region", "us-east-1")],
        ..Default::default()
    };
    c.parse_created(execute(
        c.build_deploy_partition(&Definition::from(partition.clone())).unwrap(),
    ))
        .unwrap();
    let listed = c.parse_list_partitions(execute(c.build_list_partitions())).unwrap();
    assert_eq!(listed, vec![partition.clone()]);
    let described = c
        .parse_describe_partition(execute(c.build_describe_partition("P1")))
        .unwrap();
    assert_eq!(described.property_value("region"), Some("us-east-1"));

    let policy = Definition::<AutoscalePolicy>::from_json(
        r#"{"id":"economy","loadThresholds":{"loadAverage":{"upperLimit":80,"lowerLimit":20}}}"#,
    )
    .unwrap();
    c.parse_created(execute(c.build_deploy_autoscaling_policy(&policy).unwrap()))
        .unwrap();
    let mut updated = policy.bean().clone();
    updated.description = Some("tuned".into());
    c.parse_updated(execute(
        c.build_update_autoscaling_policy(&Definition::from(updated)).unwrap(),
    ))
    .unwrap();
    let described = c
        .parse_describe_autoscaling_policy(execute(c.build_describe_autoscaling_policy("economy")))
        .unwrap();
    assert_eq!(described.description.as_deref(), Some("tuned"));
    let load_average = described
        .load_thresholds
        .and_then(|t| t.load_average)
        .unwrap();
    assert_eq!(load_average.upper_limit, Some(80.0));
    assert_eq!(load_average.average, None);
    let all = c
        .parse_list_autoscaling_policies(execute(c.build_list_autoscaling_policies()))
        .unwrap();
    assert_eq!(all.len(), 1);

    let deployment: Definition<DeploymentPolicy> = Definition::from_json(
        r#"{"id":"dep1","networkPartition":[{"id":"np1","partitions":[{"id":"P1","max":4}]}]}"#,
    )
    .unwrap();
    c.parse_created(execute(c.build_deploy_deployment_policy(&deployment).unwrap()))
        .unwrap();
    let described = c
        .parse_describe_deployment_policy(execute(c.build_describe_deployment_policy("dep1")))
        .unwrap();
    assert_eq!(described.max_instances(), 4);

    let missing = Definition::from(DeploymentPolicy {
        id: "ghost".into(),
        ..Default::default()
    });
    let err = c
        .parse_updated(execute(c.build_update_deployment_policy(&missing).unwrap()))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}

#[test]
fn kubernetes_lifecycle() {
    let base = start_server(Store::default());
    let c = admin_client(&base);

    let cluster: KubernetesCluster = serde_json::from_value(json!({
        "groupId": "k8s-1",
        "kubernetesMaster": {"hostId": "master", "hostIpAddress": "172.17.8.100"},
        "portRange": {"lower": 4500, "upper": 5000}
    }))
    .unwrap();
    c.parse_created(execute(
        c.build_deploy_kubernetes_cluster(&Definition::from(cluster)).unwrap(),
    ))
        .unwrap();

    let host = KubernetesHost {
        host_id: "slave1".into(),
        host_ip_address: Some("172.17.8.101".into()),
        ..Default::default()
    };
    c.parse_updated(execute(
        c.build_deploy_kubernetes_host("k8s-1", &Definition::from(host.clone()))
            .unwrap(),
    ))
    .unwrap();
    let mut moved = host.clone();
    moved.host_ip_address = Some("172.17.8.102".into());
    c.parse_updated(execute(
        c.build_update_kubernetes_host("k8s-1", "slave1", &Definition::from(moved.clone()))
            .unwrap(),
    ))
    .unwrap();

    let hosts = c
        .parse_list_kubernetes_hosts(execute(c.build_list_kubernetes_hosts("k8s-1")))
        .unwrap();
    assert_eq!(hosts, vec![moved]);

    let mut master = c
        .parse_describe_kubernetes_master(execute(c.build_describe_kubernetes_master("k8s-1")))
        .unwrap();
    assert_eq!(master.host_id, "master");
    master.endpoint = Some("http://172.17.8.100:8080".into());
    c.parse_updated(execute(
        c.build_update_kubernetes_master("k8s-1", &Definition::from(master))
            .unwrap(),
    ))
    .unwrap();

    let described = c
        .parse_describe_kubernetes_cluster(execute(c.build_describe_kubernetes_cluster("k8s-1")))
        .unwrap();
    assert_eq!(
        described.kubernetes_master.and_then(|m| m.endpoint).as_deref(),
        Some("http://172.17.8.100:8080")
    );

    c.parse_deleted(execute(c.build_undeploy_kubernetes_host("k8s-1", "slave1")))
        .unwrap();
    c.parse_deleted(execute(c.build_undeploy_kubernetes_cluster("k8s-1")))
        .unwrap();
    let clusters = c
        .parse_list_kubernetes_clusters(execute(c.build_list_kubernetes_clusters()))
        .unwrap();
    assert!(clusters.is_empty());
}

#[test]
fn tenant_and_user_lifecycle() {
    let base = start_server(Store::default());
    let c = admin_client(&base);

    let tenant = TenantInfo {
        admin: Some("boss".into()),
        admin_password: Some("secret".into()),
        tenant_domain: "acme.com".into(),
        email: Some("boss@acme.com".into()),
        ..Default::default()
    };
    c.parse_created(execute(c.build_add_tenant(&tenant).unwrap()))
        .unwrap();
    c.parse_accepted(execute(c.build_deactivate_tenant("acme.com")))
        .unwrap();

    let tenants = c.parse_list_tenants(execute(c.build_list_tenants())).unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].tenant_id, Some(1));
    assert_eq!(tenants[0].state_label(), "De-active");
    assert!(tenants[0].admin_password.is_none());

    c.parse_accepted(execute(c.build_activate_tenant("acme.com")))
        .unwrap();
    let tenants = c.parse_list_tenants(execute(c.build_list_tenants())).unwrap();
    assert_eq!(tenants[0].state_label(), "Active");

    c.parse_deleted(execute(c.build_delete_tenant("acme.com")))
        .unwrap();
    let err = c
        .parse_accepted(execute(c.build_activate_tenant("acme.com")))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let user = UserInfo {
        user_name: "jane".into(),
        credential: Some("pw".into()),
        role: Some("admin".into()),
        ..Default::default()
    };
    c.parse_created(execute(c.build_add_user(&user).unwrap()))
        .unwrap();
    let users = c.parse_list_users(execute(c.build_list_users())).unwrap();
    assert_eq!(users[0].user_name, "jane");
    assert!(users[0].credential.is_none());
    c.parse_deleted(execute(c.build_delete_user("jane"))).unwrap();
}

#[test]
fn subscription_operations_need_a_known_alias() {
    let mut store = Store::default();
    store.seed_cluster(
        "myphp",
        json!({
            "serviceName": "php",
            "clusterId": "myphp.php.domain",
            "member": [
                {"memberId": "m1", "memberIp": "10.0.0.1", "memberPublicIp": "54.1.1.1", "status": "Active"},
                {"memberId": "m2", "memberIp": "10.0.0.2", "status": "Starting"}
            ]
        }),
    );
    let base = start_server(store);
    let c = admin_client(&base);

    let cluster = c
        .parse_describe_cluster(execute(c.build_describe_cluster("myphp")))
        .unwrap();
    assert_eq!(cluster.member_ips(), vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(cluster.member_public_ips(), vec!["54.1.1.1"]);

    let err = c
        .parse_describe_cluster(execute(c.build_describe_cluster("nope")))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    c.parse_accepted(execute(c.build_synchronize_artifacts("myphp")))
        .unwrap();

    let properties = vec![Property::new("PORT", "8080")];
    c.parse_updated(execute(
        c.build_update_subscription_properties("myphp", &Definition::from(properties.clone()))
            .unwrap(),
    ))
    .unwrap();
    let cluster = c
        .parse_describe_cluster(execute(c.build_describe_cluster("myphp")))
        .unwrap();
    assert_eq!(cluster.property, properties);
}

#[test]
fn metadata_accumulates_values() {
    let base = start_server(Store::default());
    let c = admin_client(&base);

    let first = MetadataProperty::new("mysql.host", "10.0.0.5");
    c.parse_created(execute(c.build_add_metadata("app1", &first).unwrap()))
        .unwrap();
    let second = MetadataProperty::new("mysql.host", "10.0.0.6");
    c.parse_created(execute(c.build_add_metadata("app1", &second).unwrap()))
        .unwrap();

    let properties = c
        .parse_list_metadata(execute(c.build_list_metadata("app1")))
        .unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].values, vec!["10.0.0.5", "10.0.0.6"]);
}
