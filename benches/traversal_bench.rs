#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use domwalk::traversal::{next_element_sibling, siblings};
use domwalk::{Attribute, Document, NodeId};

// ---------------------------------------------------------------------------
// Tree generators
// ---------------------------------------------------------------------------

/// A `<ul>` with `n` `<li>` children separated by whitespace text nodes.
/// Returns the document and the middle `<li>`.
fn make_list(n: usize) -> (Document, NodeId) {
    let mut doc = Document::with_capacity(n * 2 + 1);
    let ul = doc.create_element("ul", vec![]);
    doc.append_child(doc.root(), ul).expect("append ul");
    let mut middle = ul;
    for i in 0..n {
        let li = doc.create_element("li", vec![Attribute::new("data-i", i.to_string())]);
        let ws = doc.create_text("\n  ");
        doc.append_child(ul, li).expect("append li");
        doc.append_child(ul, ws).expect("append text");
        if i == n / 2 {
            middle = li;
        }
    }
    (doc, middle)
}

/// A parentless chain of `n` text nodes. Returns the document and the
/// middle node.
fn make_detached(n: usize) -> (Document, NodeId) {
    let mut doc = Document::with_capacity(n);
    let chain: Vec<NodeId> = (0..n).map(|i| doc.create_text(i.to_string())).collect();
    doc.link_detached(&chain).expect("link chain");
    (doc, chain[n / 2])
}

/// `n` comments followed by one element, all under the document node.
/// Returns the document and the first comment.
fn make_comment_run(n: usize) -> (Document, NodeId) {
    let mut doc = Document::with_capacity(n + 1);
    let root = doc.root();
    let first = doc.create_comment("0");
    doc.append_child(root, first).expect("append comment");
    for i in 1..n {
        let c = doc.create_comment(i.to_string());
        doc.append_child(root, c).expect("append comment");
    }
    let target = doc.create_element("target", vec![]);
    doc.append_child(root, target).expect("append target");
    (doc, first)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_siblings(c: &mut Criterion) {
    let mut group = c.benchmark_group("siblings");
    for n in [10, 100, 1000] {
        let (doc, li) = make_list(n);
        group.bench_with_input(BenchmarkId::new("with_parent", n), &n, |b, _| {
            b.iter(|| siblings(black_box(&doc), black_box(li)));
        });
        let (doc, mid) = make_detached(n);
        group.bench_with_input(BenchmarkId::new("detached", n), &n, |b, _| {
            b.iter(|| siblings(black_box(&doc), black_box(mid)));
        });
    }
    group.finish();
}

fn bench_next_element_sibling(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_element_sibling");
    for n in [1, 16, 256] {
        let (doc, first) = make_comment_run(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| next_element_sibling(black_box(&doc), black_box(first)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_siblings, bench_next_element_sibling);
criterion_main!(benches);
