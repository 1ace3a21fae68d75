//! Benchmarks for chat line decoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use twitch_line::emote::parse_native_emotes;
use twitch_line::message::tags::unescape_tag_value;
use twitch_line::{Decoder, EmoteCatalog, OffsetUnit};

/// Line without an envelope
const RAW_LINE: &str = "PING :tmi.twitch.tv";

/// Minimal tagged chat message
const SIMPLE_PRIVMSG: &str = "@color=#FF4500 :bob!bob@bob.tmi.twitch.tv PRIVMSG #dallas :Hello, world!";

/// Chat message with the full set of tags a subscriber sends
const FULL_PRIVMSG: &str = "@badge-info=subscriber/14;badges=subscriber/12,premium/1;client-nonce=9a8f;color=#0D4200;display-name=Ronni;emotes=25:0-4,12-16/1902:6-10;first-msg=0;flags=;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;returning-chatter=0;room-id=1337;subscriber=1;tmi-sent-ts=1507246572675;turbo=0;user-id=1337;user-type= :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa";

/// Timeout event
const CLEARCHAT: &str = "@ban-duration=600;ban-reason=Follow\\sthe\\srules;room-id=1337;target-user-id=42;tmi-sent-ts=1642715695392 :tmi.twitch.tv CLEARCHAT #dallas :ronni";

/// Bot command
const COMMAND: &str = "@badges=moderator/1;mod=1 :bob!bob@bob.tmi.twitch.tv PRIVMSG #dallas :!give @alice 10 points";

fn benchmark_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Decoding");
    let decoder = Decoder::default();

    let lines = vec![
        ("raw", RAW_LINE),
        ("simple_privmsg", SIMPLE_PRIVMSG),
        ("full_privmsg", FULL_PRIVMSG),
        ("clearchat", CLEARCHAT),
        ("command", COMMAND),
    ];

    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::new("decode", name), line, |b, s| {
            b.iter(|| black_box(decoder.decode(black_box(s))))
        });
    }

    group.finish();
}

fn benchmark_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Emote Enrichment");

    let catalog: Vec<(String, String)> = (0..500)
        .map(|i| (format!("emote{}", i), format!("id{}", i)))
        .collect();
    let decoder = Decoder::default().with_enricher(EmoteCatalog::global(catalog));
    let line = "@a=1 :bob!bob@bob PRIVMSG #dallas :emote1 hello emote42 emote1 world emote499";

    group.bench_function("global_catalog_500", |b| {
        b.iter(|| black_box(decoder.decode(black_box(line))))
    });

    group.finish();
}

fn benchmark_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Decoding");

    group.bench_function("unescape_tag_value", |b| {
        b.iter(|| black_box(unescape_tag_value(black_box("Follow\\sthe\\srules\\:\\sno\\sspam\\\\"))))
    });

    for unit in [OffsetUnit::CodePoint, OffsetUnit::Utf16] {
        group.bench_with_input(
            BenchmarkId::new("native_emotes", format!("{:?}", unit)),
            &unit,
            |b, &unit| {
                b.iter(|| {
                    black_box(parse_native_emotes(
                        black_box("25:0-4,12-16/1902:6-10"),
                        black_box("Kappa Keepo Kappa"),
                        unit,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_decoding,
    benchmark_enrichment,
    benchmark_fields,
);

criterion_main!(benches);
