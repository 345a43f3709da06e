use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mqjs_host::{register_default_functions, Context, Value};

fn bench_table_call(c: &mut Criterion) {
    let table = register_default_functions();
    let mut ctx = Context::new();
    let args = [Value::Int(1), Value::string("x"), Value::Bool(true)];

    c.bench_function("table call print", |b| {
        b.iter(|| {
            black_box(
                table
                    .call(&mut ctx, "print", &Value::Undefined, &args)
                    .unwrap(),
            )
        })
    });
}

fn bench_load_with_callback(c: &mut Criterion) {
    let table = register_default_functions();
    let mut ctx = Context::new();
    ctx.set_host_fn(|_ctx, _this, args| args.first().cloned().unwrap_or_default());
    let args = [Value::Int(42)];

    c.bench_function("load with callback", |b| {
        b.iter(|| {
            black_box(
                table
                    .call(&mut ctx, "load", &Value::Undefined, &args)
                    .unwrap(),
            )
        })
    });
}

fn bench_registered_dispatch(c: &mut Criterion) {
    let table = register_default_functions();
    let mut ctx = Context::new();
    let id = ctx.register_fn(|args| {
        let a = args[0].to_i32().unwrap_or(0);
        let b = args[1].to_i32().unwrap_or(0);
        Ok(Value::Int(a + b))
    });
    let args = [Value::Int(id as i32), Value::Int(2), Value::Int(3)];

    c.bench_function("registered dispatch by id", |b| {
        b.iter(|| {
            black_box(
                table
                    .call(&mut ctx, "load", &Value::Undefined, &args)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_table_call,
    bench_load_with_callback,
    bench_registered_dispatch
);
criterion_main!(benches);
