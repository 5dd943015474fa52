use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use deepenv::value::parse_value;
use deepenv::{ConfigPath, EnvConfigBuilder, EnvOptions, MapEnv};

const ENV_SIZES: &[usize] = &[10, 100, 1000];

fn bench_parse_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_value");

    group.bench_function("integer", |b| b.iter(|| parse_value(black_box("8080"))));

    group.bench_function("decimal", |b| b.iter(|| parse_value(black_box("0.25"))));

    group.bench_function("boolean", |b| b.iter(|| parse_value(black_box("TRUE"))));

    group.bench_function("json_object", |b| {
        b.iter(|| parse_value(black_box(r#"{"hosts":["a","b"],"retries":3}"#)));
    });

    // Falls through every rule
    group.bench_function("plain_string", |b| {
        b.iter(|| parse_value(black_box("postgres://localhost/db")));
    });

    group.finish();
}

fn bench_config_path(c: &mut Criterion) {
    let options = EnvOptions::default();

    c.bench_function("config_path_from_key", |b| {
        b.iter(|| {
            ConfigPath::from_key(
                black_box("DEEPENV_SERVER__TLS__CERTIFICATE_PATH"),
                black_box(&options),
            )
        });
    });
}

fn synthetic_env(size: usize) -> MapEnv {
    let mut env = MapEnv::new();
    for i in 0..size {
        env.set(format!("DEEPENV_SECTION{}__KEY{i}", i % 10), i.to_string());
        env.set(format!("UNRELATED_{i}"), "x");
    }
    env
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &size in ENV_SIZES {
        let builder = EnvConfigBuilder::new().with_source(synthetic_env(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &builder, |b, builder| {
            b.iter(|| builder.build());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_value, bench_config_path, bench_build);
criterion_main!(benches);
