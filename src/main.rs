use lowbar::{Map, Value, each, every_identity, extend, first, last, map, partition, reduce, unique};

fn main() {
    println!("\n[Array]\n");

    let arr = Value::from([3, 1, 4, 1, 5, 9, 2, 6]);
    let items = arr.as_array().unwrap_or_default();

    each(&arr, |value, key, _| println!("{key}: {value:?}"));

    println!("{:?}", unique(items));
    println!("{:?}, {:?}", first(&arr, 3), last(&arr, 3));
    println!("{:?}", map(&arr, |value, _, _| value.as_f64().unwrap_or(0.0) * 10.0));

    let (big, small) = partition(items, |value, _, _| value.as_f64().is_some_and(|n| n > 3.0));
    println!("{big:?} / {small:?}");

    let sum = reduce(
        items,
        |acc, value, _| acc.as_f64().unwrap_or(0.0) + value.as_f64().unwrap_or(0.0),
        Value::Undefined,
    );
    println!("sum = {sum:?}");

    println!("\n[Object]\n");

    let mut obj = Value::from_iter([("x", Value::from(1)), ("y", Value::from(true))]);
    println!("{:?}", every_identity(&obj));

    let source: Map = [("z".to_string(), Value::Null)].into_iter().collect();
    if let Some(object) = obj.as_object_mut() {
        extend(object, [&source]);
    }
    println!("{obj:?}");
}
