use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depreport_core::http::OutgoingRequest;
use depreport_core::types::{DeploymentRequest, DeploymentStatusRequest};
use depreport_core::{DeploymentState, RepositorySlug, Secret};

fn bench_repository_url_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_url_parsing");

    let urls = [
        ("https", "https://github.com/acme/widgets.git"),
        ("ssh_shorthand", "git@github.com:acme/widgets.git"),
        ("ssh_scheme_port", "ssh://git@github.com:22/acme/widgets.git"),
        ("invalid", "https://github.com/acme"),
    ];

    for (name, url) in urls {
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| RepositorySlug::parse(black_box(url)))
        });
    }

    group.finish();
}

fn bench_request_building(c: &mut Criterion) {
    let token = Secret::new("ghp_benchmark");
    let url = "https://api.github.com/repos/acme/widgets/deployments";

    c.bench_function("deployment_request_json", |b| {
        b.iter(|| {
            let payload = DeploymentRequest::staging(black_box("abc123"), "Success");
            OutgoingRequest::json(url, &token, &payload)
        })
    });

    c.bench_function("status_request_json", |b| {
        b.iter(|| {
            let payload = DeploymentStatusRequest::staging(
                black_box("https://ci.example.com/builds/1"),
                DeploymentState::Success,
                "Success",
            );
            OutgoingRequest::json(url, &token, &payload)
        })
    });
}

criterion_group!(benches, bench_repository_url_parsing, bench_request_building);
criterion_main!(benches);
