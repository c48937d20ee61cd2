//! Benchmarks for the roadmap layout pass.
//!
//! Run with: cargo bench -p waymap-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use waymap_layout::{LayoutConfig, calculate_node_positions};
use waymap_model::{DetailNode, MainTopic, Persona, ResourceBuckets, Section, Side};

fn synthetic_persona(sections: usize, topics_per_section: usize, children_per_topic: usize) -> Persona {
    let sections = (0..sections)
        .map(|si| Section {
            id: format!("s{si}"),
            label: format!("SECTION {si}"),
            topics: (0..topics_per_section)
                .map(|ti| MainTopic {
                    id: format!("s{si}-t{ti}"),
                    title: format!("Topic {ti}"),
                    summary: String::new(),
                    children_side: if ti % 2 == 0 { Side::Left } else { Side::Right },
                    children: (0..children_per_topic)
                        .map(|ci| DetailNode {
                            id: format!("s{si}-t{ti}-d{ci}"),
                            title: format!("Detail {ci}"),
                            summary: String::new(),
                            resources: ResourceBuckets::default(),
                        })
                        .collect(),
                    resources: ResourceBuckets::default(),
                })
                .collect(),
        })
        .collect();

    Persona {
        id: "bench".into(),
        title: "Bench".into(),
        subtitle: String::new(),
        icon: String::new(),
        sections,
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_node_positions");

    for (name, sections, topics, children) in [
        ("small", 1, 3, 3),
        ("medium", 3, 6, 5),
        ("large", 8, 10, 7),
    ] {
        let persona = synthetic_persona(sections, topics, children);
        let node_count = persona.topic_count() + persona.detail_count();
        group.throughput(Throughput::Elements(node_count as u64));
        group.bench_with_input(BenchmarkId::new("default", name), &persona, |b, p| {
            b.iter(|| calculate_node_positions(black_box(p), &LayoutConfig::DEFAULT));
        });
        let spine = LayoutConfig::DEFAULT.with_spine(true);
        group.bench_with_input(BenchmarkId::new("spine", name), &persona, |b, p| {
            b.iter(|| calculate_node_positions(black_box(p), &spine));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
