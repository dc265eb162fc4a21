//! Benchmarks for fuzzy search over menu catalogs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use menu_search::{levenshtein_distance, matches, recommend, search, suggest, Product, ProductField};

const DISHES: &[&str] = &[
    "Бургер XXXL",
    "Фирменный бургер",
    "Картофель фри",
    "Сербский соус",
    "Пицца Маргарита",
    "Салат Цезарь",
    "Куриные крылья",
    "Борщ с пампушками",
];

fn create_menu(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let name = DISHES[i % DISHES.len()];
            Product::new(i as i64, format!("{name} #{i}"), 100.0 + (i % 50) as f64 * 10.0)
                .with_description(format!("Описание блюда {name} с соусом"))
                .with_category((i % 6) as i64)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("levenshtein_word", |b| {
        b.iter(|| levenshtein_distance(black_box("фирменный"), black_box("фирменый")))
    });

    c.bench_function("fuzzy_match_phrase", |b| {
        b.iter(|| matches(black_box("Фирменный бургер с сыром"), black_box("бургр сыр"), 2))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 5000].iter() {
        let menu = create_menu(*size);

        group.bench_with_input(BenchmarkId::new("typo_query", size), size, |b, _| {
            b.iter(|| search(black_box(&menu), black_box("бургр"), &ProductField::ALL, 2))
        });
    }

    group.finish();
}

fn bench_suggest_and_recommend(c: &mut Criterion) {
    let menu = create_menu(1000);

    c.bench_function("suggest_1000", |b| {
        b.iter(|| suggest(black_box(&menu), black_box("сербкий сос"), ProductField::Name, ProductField::Description, 3))
    });

    c.bench_function("recommend_1000", |b| {
        b.iter(|| recommend(black_box(&menu[7]), black_box(&menu), 4))
    });
}

criterion_group!(benches, bench_distance, bench_search, bench_suggest_and_recommend);
criterion_main!(benches);
