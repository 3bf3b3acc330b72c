//! Criterion benchmarks for SalaryQueue operations.
//!
//! Uses seeded random rosters so runs are comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};

use roster_rank::{
    BackendTechnology, Employee, EmployeeId, FrontendTechnology, QualificationLevel, Role,
    SalaryQueue,
};

fn random_level<R: Rng>(rng: &mut R) -> QualificationLevel {
    match rng.random_range(0..3) {
        0 => QualificationLevel::Junior,
        1 => QualificationLevel::Middle,
        _ => QualificationLevel::Senior,
    }
}

fn random_role<R: Rng>(rng: &mut R) -> Role {
    match rng.random_range(0..7) {
        0 => Role::ChiefInfoOfficer,
        1 => Role::ProjectManager,
        2 => Role::BackendDeveloper {
            level: random_level(rng),
            technology: match rng.random_range(0..3) {
                0 => BackendTechnology::DotNet,
                1 => BackendTechnology::Spring,
                _ => BackendTechnology::Django,
            },
        },
        3 => Role::FrontendDeveloper {
            level: random_level(rng),
            technology: match rng.random_range(0..3) {
                0 => FrontendTechnology::Angular,
                1 => FrontendTechnology::React,
                _ => FrontendTechnology::Vue,
            },
        },
        4 => Role::DatabaseEngineer {
            level: random_level(rng),
        },
        5 => Role::DevOpsEngineer {
            level: random_level(rng),
        },
        _ => Role::Tester {
            level: random_level(rng),
        },
    }
}

fn roster(size: usize) -> Vec<Employee> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..size)
        .map(|i| {
            let role = random_role(&mut rng);
            let months = rng.random_range(0..480);
            Employee::new(format!("emp-{i}"), (i + 1) as EmployeeId, role, months).unwrap()
        })
        .collect()
}

fn filled_queue(employees: &[Employee]) -> SalaryQueue {
    let mut queue = SalaryQueue::with_capacity(employees.len());
    for employee in employees {
        queue.insert(employee.clone()).unwrap();
    }
    queue
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in [100usize, 1_000, 10_000] {
        let employees = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, emps| {
            b.iter(|| {
                let mut queue = SalaryQueue::with_capacity(emps.len());
                for employee in emps {
                    queue.insert(black_box(employee.clone())).unwrap();
                }
                queue
            });
        });
    }
    group.finish();
}

fn bench_extract_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_all");
    for size in [100usize, 1_000, 10_000] {
        let employees = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, emps| {
            b.iter_batched(
                || filled_queue(emps),
                |mut queue| {
                    while let Some(employee) = queue.extract_max() {
                        black_box(employee);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_remove_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_by_id");
    for size in [100usize, 1_000] {
        let employees = roster(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, emps| {
            b.iter_batched(
                || filled_queue(emps),
                |mut queue| {
                    // remove every other member, exercising the O(n) rebuild
                    for id in (1..=emps.len() as EmployeeId).step_by(2) {
                        queue.remove(black_box(id)).unwrap();
                    }
                    queue
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_ranked_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_snapshot");
    for size in [100usize, 1_000, 10_000] {
        let queue = filled_queue(&roster(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &queue, |b, queue| {
            b.iter(|| black_box(queue.ranked()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_extract_all,
    bench_remove_by_id,
    bench_ranked_snapshot
);
criterion_main!(benches);
