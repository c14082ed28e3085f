//! State Synchronisation Benchmarks
//!
//! Measures the cost of resolving a configuration block against the schema
//! and of mirroring a checker result back into local state.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use minio_ldap_provider::{LdapConfig, ResourceData, SchemaRegistry};
use serde_json::json;

fn bench_state_sync(c: &mut Criterion) {
    let registry = SchemaRegistry::new().expect("embedded schemas load");
    let schema = registry.get_ldap_integration_schema().clone();
    let config = json!({
        "server_addr": "10.10.3.64:30089",
        "lookup_bind_dn": "cn=admin,dc=example,dc=org",
        "lookup_bind_password": "secret",
        "user_dn_search_base_dn": "ou=users,dc=example,dc=org",
        "user_dn_search_filter": "(&(objectClass=inetOrgPerson)(uid=%s))",
        "group_search_base_dn": "ou=test-group,dc=example,dc=org",
        "group_search_filter": "(&(objectClass=groupOfNames)(member=%d))"
    });

    c.bench_function("resolve_config", |b| {
        b.iter(|| ResourceData::from_config(black_box(&schema), black_box(&config)))
    });

    let data = ResourceData::from_config(&schema, &config).expect("config resolves");
    let ldap_config = LdapConfig::from_resource_data(&data);

    c.bench_function("write_to_state", |b| {
        b.iter(|| {
            let mut target = ResourceData::new(schema.clone());
            black_box(&ldap_config).write_to(&mut target)
        })
    });
}

criterion_group!(benches, bench_state_sync);
criterion_main!(benches);
