use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::Tokenizer;

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn make_blocks(blocks: usize) -> String {
    let mut input = String::new();
    for _ in 0..blocks {
        input.push_str("<div class=box><span>hello</span><img src=x/></div>");
    }
    input
}

fn make_rawtext_adversarial(bytes: usize) -> String {
    let mut input = String::with_capacity(bytes + 32);
    input.push_str("<script>");
    while input.len() < bytes {
        input.push_str("</scri");
        input.push('<');
        input.push_str("pt");
    }
    input.push_str("</script>");
    input
}

fn bench_tokenize_small(c: &mut Criterion) {
    let input = make_blocks(SMALL_BLOCKS);
    c.bench_function("bench_tokenize_small", |b| {
        b.iter(|| black_box(Tokenizer::new(black_box(&input)).count()));
    });
}

fn bench_tokenize_large(c: &mut Criterion) {
    let input = make_blocks(LARGE_BLOCKS);
    c.bench_function("bench_tokenize_large", |b| {
        b.iter(|| black_box(Tokenizer::new(black_box(&input)).count()));
    });
}

fn bench_rawtext_adversarial(c: &mut Criterion) {
    let input = make_rawtext_adversarial(1 << 20);
    c.bench_function("bench_rawtext_adversarial", |b| {
        b.iter(|| black_box(Tokenizer::new(black_box(&input)).count()));
    });
}

fn bench_collect_html_until(c: &mut Criterion) {
    let mut input = String::from("<div>");
    input.push_str(&make_blocks(SMALL_BLOCKS));
    input.push_str("</div>");
    c.bench_function("bench_collect_html_until", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new(black_box(&input));
            tokenizer.next_token();
            black_box(tokenizer.collect_html_until("div"))
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize_small,
    bench_tokenize_large,
    bench_rawtext_adversarial,
    bench_collect_html_until
);
criterion_main!(benches);
