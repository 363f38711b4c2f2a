use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libtokenstream::CommonTokenStream;
use libtokenstream::token::CommonToken;
use libtokenstream::token::HIDDEN_CHANNEL;
use libtokenstream::token::MIN_TOKEN_TYPE;
use libtokenstream::token::TokenSpan;
use libtokenstream::token_source::IterTokenSource;

const ID: u32 = MIN_TOKEN_TYPE;
const WS: u32 = MIN_TOKEN_TYPE + 1;

/// `count` identifiers separated by whitespace, all on the default channel,
/// followed by end-of-stream.
fn synthetic_tokens(count: usize) -> Vec<CommonToken<'static>> {
    let mut tokens = Vec::with_capacity(count * 2 + 1);
    for i in 0..count {
        tokens.push(CommonToken::new(ID, format!("id{i}"), TokenSpan::default()));
        tokens.push(CommonToken::new(WS, " ", TokenSpan::default()));
    }
    tokens.push(CommonToken::eof(TokenSpan::default()));
    tokens
}

// ─── Group 1: Consume everything ─────────────────────────

fn consume_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("consume_all");

    for count in [100, 1_000, 10_000] {
        let tokens = synthetic_tokens(count);
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &tokens,
            |b, tokens| {
                b.iter(|| {
                    let mut stream = CommonTokenStream::new(
                        IterTokenSource::new(tokens.clone()),
                    );
                    stream.set_token_type_channel(WS, HIDDEN_CHANNEL);
                    while !stream.is_at_end().unwrap() {
                        stream.consume().unwrap();
                    }
                    black_box(stream.size())
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Deep lookahead ─────────────────────────────

fn deep_lookahead(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_lookahead");
    let tokens = synthetic_tokens(1_000);

    for k in [1isize, 8, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                let mut stream = CommonTokenStream::new(
                    IterTokenSource::new(tokens.clone()),
                );
                stream.set_token_type_channel(WS, HIDDEN_CHANNEL);
                while !stream.is_at_end().unwrap() {
                    black_box(stream.la(k).unwrap());
                    stream.consume().unwrap();
                }
            })
        });
    }

    group.finish();
}

// ─── Group 3: Text reconstruction ────────────────────────

fn text_reconstruction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_reconstruction");
    let tokens = synthetic_tokens(10_000);

    group.bench_function("text", |b| {
        b.iter(|| {
            let mut stream =
                CommonTokenStream::new(IterTokenSource::new(tokens.clone()));
            black_box(stream.text().unwrap())
        })
    });

    group.bench_function("text_range (middle third)", |b| {
        b.iter(|| {
            let mut stream =
                CommonTokenStream::new(IterTokenSource::new(tokens.clone()));
            black_box(stream.text_range(6_666, 13_333).unwrap())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    consume_all,
    deep_lookahead,
    text_reconstruction,
);
criterion_main!(benches);
