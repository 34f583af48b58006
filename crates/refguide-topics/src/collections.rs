//! Collection operations: arrays, vectors and hash maps in use.

use refguide_core::{EmitContext, Lines, Section, Topic, TopicError};
use std::collections::HashMap;
use std::hash::Hash;

use crate::{element, span, UNORDERED_NOTE};

/// Existence-qualified lookup: the stored value and `true`, or the
/// type's default and `false` when the key is absent.
pub fn lookup<K, V, Q>(map: &HashMap<K, V>, key: &Q) -> (V, bool)
where
    K: Eq + Hash + std::borrow::Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Copy + Default,
{
    match map.get(key) {
        Some(v) => (*v, true),
        None => (V::default(), false),
    }
}

pub struct ArrayOperations;

impl Topic for ArrayOperations {
    fn id(&self) -> &'static str {
        "operations.array_operations"
    }

    fn title(&self) -> &'static str {
        "6. ARRAY OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let mut arr: [i32; 5] = [10, 20, 30, 40, 50];

        let basics = Lines::titled(format!("Array: {:?}", arr))
            .line(format!("Length: arr.len() = {}", arr.len()))
            .line(format!("First element: arr[0] = {}", element(&arr, 0)?))
            .line(format!("Last element: arr[{}] = {}", arr.len() - 1, element(&arr, arr.len() - 1)?));

        arr[2] = 99;

        let elements: Vec<String> = arr.iter().map(|n| n.to_string()).collect();

        Ok(Section::new(self.id(), self.title())
            .note("fixed size")
            .lines(basics)
            .lines(Lines::titled("Modifying Array Elements:").line(format!("After arr[2] = 99: {:?}", arr)))
            .lines(Lines::titled("Iterating Over Array:").line(format!("Elements: {}", elements.join(" ")))))
    }
}

pub struct VectorOperations;

impl Topic for VectorOperations {
    fn id(&self) -> &'static str {
        "operations.vector_operations"
    }

    fn title(&self) -> &'static str {
        "7. VECTOR OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let mut nums = vec![1, 2, 3];
        let mut append = Lines::titled("Append Operation:").line(format!("nums = {:?}", nums));
        nums.push(4);
        append = append.line(format!("After nums.push(4): {:?}", nums));
        nums.extend([5, 6]);
        append = append.line(format!("After nums.extend([5, 6]): {:?}", nums));

        let numbers = vec![10, 20, 30, 40, 50];
        let ranges = Lines::titled("Sub-ranges:")
            .line(format!("Vec: {:?}", numbers))
            .line(format!("&numbers[1..4] = {:?} (from index 1 to 4)", span(&numbers, 1..4)?))
            .line(format!("&numbers[..3] = {:?} (first 3 elements)", span(&numbers, ..3)?))
            .line(format!("&numbers[2..] = {:?} (from index 2 to end)", span(&numbers, 2..)?));

        let original = vec![1, 2, 3, 4, 5];
        let mut copied = original.clone();
        let mut copy = Lines::titled("Deep Copy (clone):")
            .line(format!("Original: {:?}", original))
            .line(format!("Copied:   {:?}", copied));
        copied[0] = 999;
        copy = copy.line(format!(
            "After copied[0] = 999: Original: {:?}, Copied: {:?}",
            original, copied
        ));

        let mut reserved: Vec<i32> = Vec::with_capacity(5);
        reserved.resize(3, 0);
        let capacity = Lines::titled("Length & Capacity:").line(format!(
            "Vec::with_capacity(5) resized to 3: {:?}, Length: {}, Capacity: {}",
            reserved,
            reserved.len(),
            reserved.capacity()
        ));

        Ok(Section::new(self.id(), self.title())
            .note("growable")
            .lines(append)
            .lines(ranges)
            .lines(copy)
            .lines(capacity))
    }
}

pub struct MapOperations;

impl Topic for MapOperations {
    fn id(&self) -> &'static str {
        "operations.map_operations"
    }

    fn title(&self) -> &'static str {
        "8. MAP OPERATIONS"
    }

    fn deterministic(&self) -> bool {
        false
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let mut fruits: HashMap<String, i32> = HashMap::from([
            ("Apple".to_string(), 5),
            ("Banana".to_string(), 3),
            ("Orange".to_string(), 7),
        ]);

        let access = Lines::titled(format!("Map: {:?}", fruits))
            .line(format!("fruits.get(\"Apple\") = {:?}", fruits.get("Apple")))
            .line(format!("fruits.get(\"Banana\") = {:?}", fruits.get("Banana")));

        fruits.insert("Mango".to_string(), 4);
        let add = Lines::titled("Adding New Key-Value Pairs:")
            .line(format!("After fruits.insert(\"Mango\", 4): {:?}", fruits));

        let previous = fruits.insert("Apple".to_string(), 10);
        let update = Lines::titled("Updating Values:")
            .line(format!("fruits.insert(\"Apple\", 10) returned {:?}", previous))
            .line(format!("After update: {:?}", fruits));

        let (value, exists) = lookup(&fruits, "Banana");
        let mut existence = Lines::titled("Checking Key Existence (value, exists):")
            .line(format!("lookup(\"Banana\") = ({}, {})", value, exists));
        let (value, exists) = lookup(&fruits, "Grape");
        existence = existence.line(format!("lookup(\"Grape\") = ({}, {})", value, exists));
        fruits.insert("Kiwi".to_string(), 0);
        let (value, exists) = lookup(&fruits, "Kiwi");
        existence = existence.line(format!("lookup(\"Kiwi\") = ({}, {}) (stored zero)", value, exists));

        let before = format!("Before remove: {:?}", fruits);
        let removed = fruits.remove("Orange");
        let delete = Lines::titled("Deleting Keys:")
            .line(before)
            .line(format!("fruits.remove(\"Orange\") = {:?}", removed))
            .line(format!("After remove: {:?}", fruits));

        let items: Vec<String> = fruits.iter().map(|(k, v)| format!("[{}: {}]", k, v)).collect();
        let iterate = Lines::titled("Iterating Over Map:")
            .line(format!("Items: {}", items.join(" ")))
            .line(UNORDERED_NOTE);

        Ok(Section::new(self.id(), self.title())
            .note("key-value pairs")
            .lines(access)
            .lines(add)
            .lines(update)
            .lines(existence)
            .lines(delete)
            .lines(iterate))
    }
}
