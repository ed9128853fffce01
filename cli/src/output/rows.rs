//! Fixed table columns for every listable resource.

use stratos_core::types::{
    ApplicationDefinition, AutoscalePolicy, CartridgeDefinition, DeploymentPolicy, IaasProvider,
    KubernetesCluster, KubernetesHost, MetadataProperty, Partition, ServiceDefinition,
    TenantInfo, UserInfo,
};

use super::{cell, TableRow};

fn accessibility(is_public: bool) -> String {
    if is_public { "Public" } else { "Private" }.to_string()
}

impl TableRow for CartridgeDefinition {
    const HEADERS: &'static [&'static str] =
        &["Type", "Category", "Name", "Description", "Version", "Multi-Tenant"];

    fn row(&self) -> Vec<String> {
        vec![
            self.cartridge_type.clone(),
            cell(self.category.as_deref()),
            cell(self.display_name.as_deref()),
            cell(self.description.as_deref()),
            cell(self.version.as_deref()),
            self.multi_tenant.to_string(),
        ]
    }
}

impl TableRow for IaasProvider {
    const HEADERS: &'static [&'static str] =
        &["Provider", "Type", "Name", "Image ID", "Max Instance Limit"];

    fn row(&self) -> Vec<String> {
        vec![
            cell(self.provider.as_deref()),
            self.iaas_type.clone(),
            cell(self.name.as_deref()),
            cell(self.image_id.as_deref()),
            self.max_instance_limit
                .map_or_else(|| "-".to_string(), |limit| limit.to_string()),
        ]
    }
}

impl TableRow for Partition {
    const HEADERS: &'static [&'static str] = &["ID", "Provider", "Accessibility"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            cell(self.provider.as_deref()),
            accessibility(self.is_public),
        ]
    }
}

impl TableRow for AutoscalePolicy {
    const HEADERS: &'static [&'static str] = &["ID", "Accessibility"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), accessibility(self.is_public)]
    }
}

impl TableRow for DeploymentPolicy {
    const HEADERS: &'static [&'static str] = &["ID", "Accessibility", "Max Instances"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            accessibility(self.is_public),
            self.max_instances().to_string(),
        ]
    }
}

impl TableRow for KubernetesCluster {
    const HEADERS: &'static [&'static str] = &["Group ID", "Description"];

    fn row(&self) -> Vec<String> {
        vec![self.group_id.clone(), cell(self.description.as_deref())]
    }
}

impl TableRow for KubernetesHost {
    const HEADERS: &'static [&'static str] = &["Host ID", "Hostname", "IP Address"];

    fn row(&self) -> Vec<String> {
        vec![
            self.host_id.clone(),
            cell(self.hostname.as_deref()),
            cell(self.host_ip_address.as_deref()),
        ]
    }
}

impl TableRow for TenantInfo {
    const HEADERS: &'static [&'static str] = &["Domain", "Tenant ID", "Email", "State"];

    fn row(&self) -> Vec<String> {
        vec![
            self.tenant_domain.clone(),
            self.tenant_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            cell(self.email.as_deref()),
            self.state_label().to_string(),
        ]
    }
}

impl TableRow for UserInfo {
    const HEADERS: &'static [&'static str] = &["Username", "Role"];

    fn row(&self) -> Vec<String> {
        vec![self.user_name.clone(), cell(self.role.as_deref())]
    }
}

impl TableRow for ServiceDefinition {
    const HEADERS: &'static [&'static str] = &[
        "Cartridge Type",
        "Deployment Policy",
        "Autoscaling Policy",
        "Tenant Range",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.cartridge_type.clone(),
            cell(self.deployment_policy_name.as_deref()),
            cell(self.autoscaling_policy_name.as_deref()),
            cell(self.tenant_range.as_deref()),
        ]
    }
}

impl TableRow for ApplicationDefinition {
    const HEADERS: &'static [&'static str] = &["Application ID", "Name", "Alias", "Status"];

    fn row(&self) -> Vec<String> {
        vec![
            self.application_id.clone(),
            cell(self.name.as_deref()),
            cell(self.alias.as_deref()),
            cell(self.status.as_deref()),
        ]
    }
}

impl TableRow for MetadataProperty {
    const HEADERS: &'static [&'static str] = &["Key", "Values"];

    fn row(&self) -> Vec<String> {
        vec![self.key.clone(), self.values.join(", ")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_lengths_match_headers() {
        fn check<T: TableRow + Default>() {
            assert_eq!(T::default().row().len(), T::HEADERS.len());
        }
        check::<CartridgeDefinition>();
        check::<IaasProvider>();
        check::<Partition>();
        check::<AutoscalePolicy>();
        check::<DeploymentPolicy>();
        check::<KubernetesCluster>();
        check::<KubernetesHost>();
        check::<TenantInfo>();
        check::<UserInfo>();
        check::<ServiceDefinition>();
        check::<ApplicationDefinition>();
        check::<MetadataProperty>();
    }

    #[test]
    fn tenant_row_shows_state_label() {
        let tenant = TenantInfo {
            tenant_domain: "acme.com".into(),
            tenant_id: Some(7),
            active: true,
            ..Default::default()
        };
        assert_eq!(tenant.row(), vec!["acme.com", "7", "-", "Active"]);
    }

    #[test]
    fn policy_accessibility_label() {
        let policy = AutoscalePolicy {
            id: "economy".into(),
            is_public: true,
            ..Default::default()
        };
        assert_eq!(policy.row(), vec!["economy", "Public"]);
    }
}
