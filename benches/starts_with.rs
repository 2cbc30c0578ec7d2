use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordtrie::wordlist::trie::Trie;


fn generated_words() -> Vec<String> {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut words = vec![];
    for a in &letters {
        for b in &letters {
            for c in &letters[..10] {
                words.push(format!("{}{}{}", a, b, c));
                words.push(format!("{}{}{}s", a, b, c));
            }
        }
    }
    words
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = generated_words();
    let trie: Trie = words.iter().collect();

    c.bench_function("insert all", |b| b.iter(|| {
        let t: Trie = black_box(&words).iter().collect();
        t
    }));

    { let mut group = c.benchmark_group("starts_with");
        group.bench_function("one letter", |b| b.iter(|| trie.starts_with(black_box("a"))));
        group.bench_function("two letters", |b| b.iter(|| trie.starts_with(black_box("ab"))));
        group.bench_function("missing", |b| b.iter(|| trie.starts_with(black_box("zz9"))));
    }

    c.bench_function("insert then remove", |b| b.iter(|| {
        let mut t = trie.clone();
        t.insert("zzzz");
        t.remove(black_box("zzzz"))
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
