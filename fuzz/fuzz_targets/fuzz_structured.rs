#![no_main]
use arbitrary::Arbitrary;
use datautils::{deep_clone_value, equals, size, unique};
use libfuzzer_sys::{arbitrary, fuzz_target};
use serde_json::{Number, Value};

const MAX_DEPTH: usize = 6;
const MAX_ARRAY_SIZE: usize = 12;
const MAX_OBJECT_SIZE: usize = 12;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

impl FuzzValue {
    fn to_json_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: i64 = u.arbitrary()?;
                Value::Number(Number::from(n))
            }
            3 => {
                let n: f64 = u.arbitrary()?;
                Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
            }
            4 => {
                let s: String = u.arbitrary()?;
                Value::String(s)
            }
            5..=7 => {
                let len = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(len);
                for _ in 0..len {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_json_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let len = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut obj = serde_json::Map::new();
                for _ in 0..len {
                    let key: String = u.arbitrary()?;
                    let fv: FuzzValue = u.arbitrary()?;
                    obj.insert(key, fv.to_json_value(u, depth + 1)?);
                }
                Value::Object(obj)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    let Ok(fv) = u.arbitrary::<FuzzValue>() else { return };
    let Ok(value) = fv.to_json_value(&mut u, 0) else { return };

    assert!(equals(&value, &value), "equals not reflexive: {value}");
    let clone = deep_clone_value(&value);
    assert!(equals(&clone, &value), "clone differs: {value}");

    if let Value::Array(items) = &value {
        assert_eq!(size(&value), items.len());
        for deep in [false, true] {
            let once = unique(items, deep);
            let twice = unique(&once, deep);
            assert!(once.len() <= items.len());
            assert_eq!(once, twice, "unique not idempotent (deep = {deep}): {value}");
        }
        for (i, a) in items.iter().enumerate() {
            for b in &items[i..] {
                assert_eq!(equals(a, b), equals(b, a), "equals not symmetric: {a} / {b}");
            }
        }
    }
});
