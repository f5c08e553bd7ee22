//! Encoding Throughput Benchmarks
//!
//! Measures keystroke cost and whole-message throughput for short
//! challenge-sized messages and long traffic, with and without a full
//! plugboard.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma_core::{EnigmaMachine, Letter, MachineSettings, PlugPair, RotorSetting};

fn plugged_settings() -> MachineSettings {
    MachineSettings {
        rotors: vec![
            RotorSetting::new("II", 1, 1),
            RotorSetting::new("IV", 11, 20),
            RotorSetting::new("V", 2, 11),
        ],
        reflector: "B".to_string(),
        plugboard: ["AV", "BS", "CG", "DL", "FU", "HZ", "IN", "KM", "OW", "RX"]
            .iter()
            .filter_map(|pair| pair.parse::<PlugPair>().ok())
            .collect(),
    }
}

fn message(len: usize) -> String {
    (b'A'..=b'Z').cycle().take(len).map(char::from).collect()
}

fn bench_press(c: &mut Criterion) {
    let Ok(mut machine) = EnigmaMachine::historical(&plugged_settings()) else {
        return;
    };
    c.bench_function("press", |b| b.iter(|| machine.press(black_box(Letter::A))));
}

fn bench_encode_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_message");
    let configs = [
        ("unplugged", MachineSettings::default()),
        ("ten_plugs", plugged_settings()),
    ];

    for (label, settings) in &configs {
        let Ok(machine) = EnigmaMachine::historical(settings) else {
            continue;
        };
        for len in [32usize, 1024, 16_384] {
            let text = message(len);
            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(BenchmarkId::new(*label, len), &text, |b, text| {
                b.iter(|| {
                    let mut machine = machine.clone();
                    machine.encode_message(black_box(text))
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_press, bench_encode_message);
criterion_main!(benches);
