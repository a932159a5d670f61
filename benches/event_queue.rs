use criterion::{Criterion, criterion_group, criterion_main};
use miniframe::{Frame, HeadlessWindow};

fn bench_push_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_queue");

    group.bench_function("push_drain_1k", |b| {
        b.iter(|| {
            let frame = Frame::new(HeadlessWindow::new());
            let sender = frame.event_sender();
            let events = frame.events();

            for i in 0..1_000 {
                sender.push(format!("event-{i}"));
            }
            for _ in 0..1_000 {
                std::hint::black_box(events.next());
            }
        });
    });

    group.bench_function("multi_producer_drain_1k", |b| {
        b.iter(|| {
            let frame = Frame::new(HeadlessWindow::new());
            let events = frame.events();

            let handles: Vec<_> = (0..4)
                .map(|producer| {
                    let sender = frame.event_sender();
                    std::thread::spawn(move || {
                        for i in 0..250 {
                            sender.push(format!("p{producer}-{i}"));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("producer panicked");
            }

            for _ in 0..1_000 {
                std::hint::black_box(events.next());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_then_drain);
criterion_main!(benches);
