//! Benchmarks for M3U playlist parsing and entry classification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strmforged::library::{classify, sanitize_filename};
use strmforged::playlist;

/// Hand-written playlist with the shapes seen in real provider exports.
const SMALL_PLAYLIST: &str = r#"#EXTM3U
#EXTINF:-1 tvg-id="" tvg-name="Inception (2010)" tvg-logo="" group-title="VOD | Movies",Inception (2010)
http://host:8080/movie/user/pass/1001.mkv
#EXTINF:-1 tvg-id="" tvg-name="Breaking Bad (2008) S01 E01" tvg-logo="" group-title="Series",Breaking Bad S01 E01
http://host:8080/series/user/pass/2001.mp4
#EXTINF:-1 tvg-id="" tvg-name="Doctor Who (2005-2022) S03 E10" tvg-logo="" group-title="Series",Doctor Who
http://host:8080/series/user/pass/2044.mp4
#EXTINF:-1 tvg-name="News Channel" group-title="Live",News Channel
http://host:8080/live/user/pass/3001.ts
#EXTINF:-1 tvg-name="Some Obscure Film" group-title="VOD",Some Obscure Film
http://host:8080/movie/user/pass/1002.avi
"#;

/// Build a playlist with `entries` lines mixing movies, episodes and live
/// channels roughly the way provider exports do.
fn synthetic_playlist(entries: usize) -> String {
    let mut text = String::from("#EXTM3U\n");
    for i in 0..entries {
        if i % 10 == 9 {
            // Live channel, not materialized.
            text.push_str(&format!(
                "#EXTINF:-1 tvg-name=\"Channel {i}\" group-title=\"Live\",Channel {i}\n"
            ));
            text.push_str(&format!("http://host:8080/live/user/pass/{i}.ts\n"));
        } else if i % 3 == 0 {
            text.push_str(&format!(
                "#EXTINF:-1 tvg-id=\"\" tvg-name=\"Show {i} (2020) S{:02} E{:02}\" group-title=\"Series\",Show {i}\n",
                i % 30 + 1,
                i % 24 + 1
            ));
            text.push_str(&format!("http://host:8080/series/user/pass/{i}.mp4\n"));
        } else {
            text.push_str(&format!(
                "#EXTINF:-1 tvg-id=\"\" tvg-name=\"Movie {i} (19{:02})\" group-title=\"VOD\",Movie {i}\n",
                i % 100
            ));
            text.push_str(&format!("http://host:8080/movie/user/pass/{i}.mkv\n"));
        }
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_parse");

    group.throughput(Throughput::Bytes(SMALL_PLAYLIST.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("parse", "small"),
        &SMALL_PLAYLIST,
        |b, text| {
            b.iter(|| playlist::parse(black_box(text)));
        },
    );

    for entries in [100usize, 1_000, 10_000] {
        let text = synthetic_playlist(entries);
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::new("parse", entries), &text, |b, text| {
            b.iter(|| playlist::parse(black_box(text)));
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("movie", |b| {
        b.iter(|| classify(black_box("Inception (2010)")));
    });

    group.bench_function("movie_without_year", |b| {
        b.iter(|| classify(black_box("Some Obscure Film")));
    });

    group.bench_function("episode", |b| {
        b.iter(|| classify(black_box("Breaking Bad (2008) S01 E01")));
    });

    group.bench_function("episode_with_year_range", |b| {
        b.iter(|| classify(black_box("Doctor Who (2005-2022) S03 E10")));
    });

    group.finish();
}

fn bench_naming(c: &mut Criterion) {
    let mut group = c.benchmark_group("naming");

    let movie = classify("Mission: Impossible (1996)");
    let episode = classify("Breaking Bad (2008) S01 E01");

    group.bench_function("strm_file_name/movie", |b| {
        b.iter(|| black_box(&movie).strm_file_name());
    });

    group.bench_function("strm_file_name/episode", |b| {
        b.iter(|| black_box(&episode).strm_file_name());
    });

    group.bench_function("sanitize_filename", |b| {
        b.iter(|| sanitize_filename(black_box(r#"What? The: Movie\Part/2 "Cut" <HD>|*"#)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_classify, bench_naming);
criterion_main!(benches);
