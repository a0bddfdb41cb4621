//! Elastic Load Balancing V2 (`elasticloadbalancing`).
//!
//! Application, network and gateway load balancers share a prefix; the
//! load balancer kind is the second path component of every ARN.

use crate::catalog::Service;
use crate::iam::IamAction;

const AUTH_DOCS: &str = "https://docs.aws.amazon.com/elasticloadbalancing/latest/userguide/load-balancer-authentication-access-control.html";

resource_types! {
    LISTENER_APP = "listener/app"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:listener/app/${LoadBalancerName}/${LoadBalancerId}/${ListenerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LISTENER_RULE_APP = "listener-rule/app"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:listener-rule/app/${LoadBalancerName}/${LoadBalancerId}/${ListenerId}/${ListenerRuleId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LISTENER_NET = "listener/net"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:listener/net/${LoadBalancerName}/${LoadBalancerId}/${ListenerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LISTENER_RULE_NET = "listener-rule/net"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:listener-rule/net/${LoadBalancerName}/${LoadBalancerId}/${ListenerId}/${ListenerRuleId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LISTENER_GWY = "listener/gwy"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:listener/gwy/${LoadBalancerName}/${LoadBalancerId}/${ListenerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LOADBALANCER_APP = "loadbalancer/app/"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:loadbalancer/app/${LoadBalancerName}/${LoadBalancerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LOADBALANCER_GWY = "loadbalancer/gwy/"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:loadbalancer/gwy/${LoadBalancerName}/${LoadBalancerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    LOADBALANCER_NET = "loadbalancer/net/"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:loadbalancer/net/${LoadBalancerName}/${LoadBalancerId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    TARGETGROUP = "targetgroup"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:targetgroup/${TargetGroupName}/${TargetGroupId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
    TRUSTSTORE = "truststore"
        => "arn:${Partition}:elasticloadbalancing:${Region}:${Account}:truststore/${TrustStoreName}/${TrustStoreId}"
        ["aws:ResourceTag/${TagKey}", "elasticloadbalancing:ResourceTag/${TagKey}"];
}

actions! {
    prefix = "elasticloadbalancing";
    docs = "https://docs.aws.amazon.com/elasticloadbalancing/latest/APIReference/";

    /// Grants permission to add the specified certificates to the specified secure listener
    AddListenerCertificates => Write [LISTENER_APP, LISTENER_NET] [];
    /// Grants permission to add the specified tags to the specified load balancer
    AddTags => Tagging [
        LISTENER_APP, LISTENER_RULE_APP, LISTENER_NET, LISTENER_RULE_NET, LISTENER_GWY,
        LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET, TARGETGROUP, TRUSTSTORE,
    ] ["aws:RequestTag/${TagKey}", "aws:TagKeys", "elasticloadbalancing:CreateAction"];
    /// Grants permission to add revocation contents to a trust store
    AddTrustStoreRevocations => Write [TRUSTSTORE] [];
    /// Grants permission to create a listener for the specified Application Load Balancer
    CreateListener => Write [LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a load balancer
    CreateLoadBalancer => Write [LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET] [
        "aws:RequestTag/${TagKey}",
        "aws:TagKeys",
        "elasticloadbalancing:Scheme",
        "elasticloadbalancing:SecurityGroup",
        "elasticloadbalancing:Subnet",
    ];
    /// Grants permission to create a rule for the specified listener
    CreateRule => Write [LISTENER_APP, LISTENER_NET] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a target group
    CreateTargetGroup => Write [TARGETGROUP] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to create a trust store
    CreateTrustStore => Write [TRUSTSTORE] ["aws:RequestTag/${TagKey}", "aws:TagKeys"];
    /// Grants permission to delete the specified listener
    DeleteListener => Write [LISTENER_APP, LISTENER_GWY, LISTENER_NET] [];
    /// Grants permission to delete the specified load balancer and its attached listeners
    DeleteLoadBalancer => Write [LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET] [];
    /// Grants permission to delete the specified rule
    DeleteRule => Write [LISTENER_RULE_APP, LISTENER_RULE_NET] [];
    /// Grants permission to delete a shared trust store association
    DeleteSharedTrustStoreAssociation => Write [TRUSTSTORE] [];
    /// Grants permission to delete the specified target group
    DeleteTargetGroup => Write [TARGETGROUP] [];
    /// Grants permission to delete the specified trust store
    DeleteTrustStore => Write [TRUSTSTORE] [];
    /// Grants permission to deregister the specified targets from the specified target group
    DeregisterTargets => Write [TARGETGROUP] [];
    /// Grants permission to describe the current Elastic Load Balancing resource limits for the AWS account
    DescribeAccountLimits => Read [] [];
    /// Grants permission to describe the capacity reservation status for the specified load balancer
    DescribeCapacityReservation => Read [] [];
    /// Grants permission to describe the attributes for the specified listener
    DescribeListenerAttributes => Read [] [];
    /// Grants permission to describe the certificates for the specified secure listener
    DescribeListenerCertificates => Read [] [];
    /// Grants permission to describe the specified listeners or the listeners for the specified Application Load Balancer
    DescribeListeners => Read [] [];
    /// Grants permission to describe the attributes for the specified load balancer
    DescribeLoadBalancerAttributes => Read [] [];
    /// Grants permission to describe the specified Application Load Balancers or all of your Application Load Balancers
    DescribeLoadBalancers => Read [] [];
    /// Grants permission to describe the specified rules or the rules for the specified listener
    DescribeRules => Read [] [];
    /// Grants permission to describe the specified policies or all policies used for SSL negotiation
    DescribeSSLPolicies => Read [] [];
    /// Grants permission to describe the tags associated with one or more resources
    DescribeTags => Read [] [];
    /// Grants permission to describe the attributes for the specified target group
    DescribeTargetGroupAttributes => Read [] [];
    /// Grants permission to describe the specified target groups or all of your target groups
    DescribeTargetGroups => Read [] [];
    /// Grants permission to describe the health of the specified targets or all of your targets
    DescribeTargetHealth => Read [] [];
    /// Grants permission to describe specific trust store associations
    DescribeTrustStoreAssociations => Read [] [];
    /// Grants permission to describe revocation files for a specific trust store
    DescribeTrustStoreRevocations => Read [] [];
    /// Grants permission to describe specific trust stores
    DescribeTrustStores => Read [] [];
    /// Grants permission to retrieve the resource policy for a specified resource
    GetResourcePolicy => Read [TRUSTSTORE] [];
    /// Grants permission to retrieve the ca certificates bundle for a specific trust store
    GetTrustStoreCaCertificatesBundle => Read [TRUSTSTORE] [];
    /// Grants permission to retrieve a revocation file for a specific trust store
    GetTrustStoreRevocationContent => Read [TRUSTSTORE] [];
    /// Grants permission to modify the capacity reservation of the specified load balancer
    ModifyCapacityReservation => Write [LOADBALANCER_APP, LOADBALANCER_NET] [];
    /// Grants permission to modify the specified properties of the specified listener
    ModifyListener => Write [LISTENER_APP, LISTENER_NET] [];
    /// Grants permission to modify the specified attributes of the specified listener
    ModifyListenerAttributes => Write [LISTENER_APP, LISTENER_GWY, LISTENER_NET] [];
    /// Grants permission to modify the attributes of the specified load balancer
    ModifyLoadBalancerAttributes => Write [LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET] [];
    /// Grants permission to modify the specified rule
    ModifyRule => Write [LISTENER_RULE_APP, LISTENER_RULE_NET] [];
    /// Grants permission to modify the health checks used when evaluating the health state of the targets in the specified target group
    ModifyTargetGroup => Write [TARGETGROUP] [];
    /// Grants permission to modify the specified attributes of the specified target group
    ModifyTargetGroupAttributes => Write [TARGETGROUP] [];
    /// Grants permission to modify the specified trust store
    ModifyTrustStore => Write [TRUSTSTORE] [];
    /// Grants permission to register the specified targets with the specified target group
    RegisterTargets => Write [TARGETGROUP] [];
    /// Grants permission to remove the specified certificates of the specified secure listener
    RemoveListenerCertificates => Write [LISTENER_APP, LISTENER_NET] [];
    /// Grants permission to remove one or more tags from the specified load balancer
    RemoveTags => Tagging [
        LISTENER_APP, LISTENER_RULE_APP, LISTENER_NET, LISTENER_RULE_NET, LISTENER_GWY,
        LOADBALANCER_APP, LOADBALANCER_GWY, LOADBALANCER_NET, TARGETGROUP, TRUSTSTORE,
    ] ["aws:TagKeys"];
    /// Grants permission to remove revocation contents from a trust store
    RemoveTrustStoreRevocations => Write [TRUSTSTORE] [];
    /// Grants permission to set the type of IP addresses used by the subnets of the specified load balancer
    SetIpAddressType => Write [LOADBALANCER_APP, LOADBALANCER_NET] [];
    /// Grants permission to set the priorities of the specified rules
    SetRulePriorities => Write [LISTENER_RULE_APP, LISTENER_RULE_NET] [];
    /// Grants permission to associate the specified security groups with the specified load balancer
    SetSecurityGroups => Write [LOADBALANCER_APP, LOADBALANCER_NET] ["elasticloadbalancing:SecurityGroup"];
    /// Grants permission to enable the Availability Zone for the specified subnets for the specified load balancer
    SetSubnets => Write [LOADBALANCER_APP, LOADBALANCER_NET] ["elasticloadbalancing:Subnet"];
    /// Grants permission to allow a load balancer to establish a session with an identity provider
    SetWebAcl @ AUTH_DOCS => Write [LOADBALANCER_APP] [];
}

pub static SERVICE: Service = Service {
    prefix: <Action as IamAction>::PREFIX,
    name: "Elastic Load Balancing V2",
    api_reference: API_REFERENCE,
    condition_keys: &[
        "aws:RequestTag/${TagKey}",
        "aws:ResourceTag/${TagKey}",
        "aws:TagKeys",
        "elasticloadbalancing:CreateAction",
        "elasticloadbalancing:ResourceTag/${TagKey}",
        "elasticloadbalancing:Scheme",
        "elasticloadbalancing:SecurityGroup",
        "elasticloadbalancing:Subnet",
    ],
    resource_types: RESOURCE_TYPES,
    actions: ACTIONS,
};

#[cfg(test)]
mod test {
    use super::{LISTENER_RULE_APP, LOADBALANCER_APP, SERVICE};
    use crate::aws::ArnOptions;

    #[test]
    fn keys_drop_punctuation() {
        let resource_type = SERVICE.resource_type("loadbalancerApp").expect("should exist");
        assert_eq!(resource_type.name, "loadbalancer/app/");
        assert_eq!(resource_type.key(), "loadbalancerApp");
        assert!(SERVICE.resource_type("listenerRuleNet").is_ok());
    }

    #[test]
    fn load_balancer_ids_are_separate_fields() {
        let options = ArnOptions::new()
            .account("123456789012")
            .field("loadBalancerName", "web")
            .field("loadBalancerId", "50dc6c495c0c9188");
        assert_eq!(
            LOADBALANCER_APP.build(&options),
            "arn:*:elasticloadbalancing:*:123456789012:loadbalancer/app/web/50dc6c495c0c9188"
        );
    }

    #[test]
    fn listener_rule_defaults() {
        assert_eq!(
            LISTENER_RULE_APP.build(&ArnOptions::new()),
            "arn:*:elasticloadbalancing:*:*:listener-rule/app/*/*/*/*"
        );
    }
}
