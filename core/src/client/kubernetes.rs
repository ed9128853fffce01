use super::{parse_many, parse_one, StratosClient};
use crate::definition::Definition;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{KubernetesCluster, KubernetesHost, KubernetesMaster};

impl StratosClient {
    pub fn build_list_kubernetes_clusters(&self) -> HttpRequest {
        self.get(&Endpoint::KubernetesClusters)
    }

    pub fn parse_list_kubernetes_clusters(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<KubernetesCluster>, ApiError> {
        parse_many(response, "kubernetesCluster")
    }

    pub fn build_describe_kubernetes_cluster(&self, cluster_id: &str) -> HttpRequest {
        self.get(&Endpoint::KubernetesCluster {
            cluster_id: cluster_id.to_string(),
        })
    }

    pub fn parse_describe_kubernetes_cluster(
        &self,
        response: HttpResponse,
    ) -> Result<KubernetesCluster, ApiError> {
        parse_one(response, "kubernetesCluster")
    }

    pub fn build_deploy_kubernetes_cluster(
        &self,
        cluster: &Definition<KubernetesCluster>,
    ) -> Result<HttpRequest, ApiError> {
        self.send_json(HttpMethod::Post, &Endpoint::KubernetesClusters, cluster)
    }

    pub fn build_undeploy_kubernetes_cluster(&self, cluster_id: &str) -> HttpRequest {
        self.delete(&Endpoint::KubernetesCluster {
            cluster_id: cluster_id.to_string(),
        })
    }

    pub fn build_list_kubernetes_hosts(&self, cluster_id: &str) -> HttpRequest {
        self.get(&Endpoint::KubernetesHosts {
            cluster_id: cluster_id.to_string(),
        })
    }

    pub fn parse_list_kubernetes_hosts(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<KubernetesHost>, ApiError> {
        parse_many(response, "kubernetesHost")
    }

    /// Hosts are added with a PUT on the cluster's minion collection and
    /// acknowledged with 200 (`parse_updated`).
    pub fn build_deploy_kubernetes_host(
        &self,
        cluster_id: &str,
        host: &Definition<KubernetesHost>,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = Endpoint::KubernetesMinions {
            cluster_id: cluster_id.to_string(),
        };
        self.send_json(HttpMethod::Put, &endpoint, host)
    }

    pub fn build_update_kubernetes_host(
        &self,
        cluster_id: &str,
        host_id: &str,
        host: &Definition<KubernetesHost>,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = Endpoint::KubernetesMinion {
            cluster_id: cluster_id.to_string(),
            minion_id: host_id.to_string(),
        };
        self.send_json(HttpMethod::Put, &endpoint, host)
    }

    pub fn build_undeploy_kubernetes_host(&self, cluster_id: &str, host_id: &str) -> HttpRequest {
        self.delete(&Endpoint::KubernetesHost {
            cluster_id: cluster_id.to_string(),
            host_id: host_id.to_string(),
        })
    }

    pub fn build_describe_kubernetes_master(&self, cluster_id: &str) -> HttpRequest {
        self.get(&Endpoint::KubernetesMaster {
            cluster_id: cluster_id.to_string(),
        })
    }

    pub fn parse_describe_kubernetes_master(
        &self,
        response: HttpResponse,
    ) -> Result<KubernetesMaster, ApiError> {
        parse_one(response, "kubernetesMaster")
    }

    pub fn build_update_kubernetes_master(
        &self,
        cluster_id: &str,
        master: &Definition<KubernetesMaster>,
    ) -> Result<HttpRequest, ApiError> {
        let endpoint = Endpoint::KubernetesMaster {
            cluster_id: cluster_id.to_string(),
        };
        self.send_json(HttpMethod::Put, &endpoint, master)
    }
}
