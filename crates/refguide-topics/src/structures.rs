//! Data structures guide: arrays, vectors, maps, structs and references.

use refguide_core::{cells, EmitContext, Lines, Section, Table, Topic, TopicError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::mem::{size_of, size_of_val};
use std::rc::Rc;

use crate::{element, span, UNORDERED_NOTE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    /// Nested record
    pub address: Address,
}

impl Person {
    pub fn sample() -> Self {
        Person {
            name: "John Doe".to_string(),
            age: 30,
            address: Address {
                street: "123 Main St".to_string(),
                city: "Anytown".to_string(),
                zip: 12345,
            },
        }
    }
}

pub struct FixedArrays;

impl Topic for FixedArrays {
    fn id(&self) -> &'static str {
        "structures.arrays"
    }

    fn title(&self) -> &'static str {
        "ARRAYS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let empty_array: [i32; 5] = Default::default();
        let mut filled_array: [i32; 5] = [2, 5, 7, 9, 11];

        let table = Table::new(&[("Instance", 16), ("Contents", 24), ("Len", 5), ("Size(bytes)", 11)])
            .row(cells![
                "[i32; 5] default",
                format!("{:?}", empty_array),
                empty_array.len(),
                size_of_val(&empty_array)
            ])
            .row(cells![
                "[i32; 5] filled",
                format!("{:?}", filled_array),
                filled_array.len(),
                size_of_val(&filled_array)
            ]);

        let first = *element(&filled_array, 0)?;
        let third = *element(&filled_array, 2)?;
        filled_array[1] = 100;

        Ok(Section::new(self.id(), self.title())
            .note("fixed size, length is part of the type")
            .table(table)
            .lines(
                Lines::titled("Operations:")
                    .line(format!("Index [0]: {} | Index [2]: {}", first, third))
                    .line(format!("After Update [1] = 100: {:?}", filled_array)),
            ))
    }
}

pub struct Vectors;

impl Topic for Vectors {
    fn id(&self) -> &'static str {
        "structures.vectors"
    }

    fn title(&self) -> &'static str {
        "VECTORS"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let absent: Option<Vec<String>> = None;
        let empty: Vec<String> = Vec::new();
        let mut filled: Vec<String> = ["this", "is", "a", "vector"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        filled.push("example".to_string());

        let table = Table::new(&[
            ("Instance", 20),
            ("Contents", 42),
            ("Len", 4),
            ("Cap", 4),
            ("Size(bytes)", 11),
        ])
        .row(cells![
            "Option<Vec> None",
            format!("{:?}", absent),
            absent.as_ref().map_or(0, Vec::len),
            absent.as_ref().map_or(0, Vec::capacity),
            size_of_val(&absent)
        ])
        .row(cells![
            "Vec::new()",
            format!("{:?}", empty),
            empty.len(),
            empty.capacity(),
            size_of_val(&empty)
        ])
        .row(cells![
            "vec![..] + push",
            format!("{:?}", filled),
            filled.len(),
            filled.capacity(),
            size_of_val(&filled)
        ]);

        let mut extended = filled.clone();
        extended.push("more".to_string());

        let ops = Lines::titled("Operations:")
            .line(format!(
                "Push onto copy: {:?} | Source Len: {}",
                extended,
                filled.len()
            ))
            .line(format!("Index [1]: {}", element(&filled, 1)?))
            .line(format!("Range [1..3]: {:?}", span(&filled, 1..3)?))
            .line(format!("Range [..2]: {:?}", span(&filled, ..2)?));

        filled[0] = "modified".to_string();

        Ok(Section::new(self.id(), self.title())
            .note("growable, heap allocated")
            .table(table)
            .lines(
                ops.line(format!("After Update [0]: {:?}", filled))
                    .line(format!("Handle size: {}", ctx.platform_note())),
            ))
    }
}

pub struct Maps;

impl Topic for Maps {
    fn id(&self) -> &'static str {
        "structures.maps"
    }

    fn title(&self) -> &'static str {
        "HASH MAPS"
    }

    fn deterministic(&self) -> bool {
        false
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let absent: Option<HashMap<String, i32>> = None;
        let empty: HashMap<String, i32> = HashMap::new();
        let mut filled: HashMap<String, i32> = HashMap::new();
        filled.insert("success".to_string(), 200);
        filled.insert("error".to_string(), 400);
        filled.insert("failed".to_string(), 500);

        let table = Table::new(&[("Instance", 20), ("Contents", 45), ("Len", 4), ("Size(bytes)", 11)])
            .row(cells![
                "Option<HashMap> None",
                format!("{:?}", absent),
                absent.as_ref().map_or(0, HashMap::len),
                size_of_val(&absent)
            ])
            .row(cells!["HashMap::new()", format!("{:?}", empty), empty.len(), size_of_val(&empty)])
            .row(cells!["3 inserts", format!("{:?}", filled), filled.len(), size_of_val(&filled)]);

        let success = filled
            .get("success")
            .copied()
            .ok_or_else(|| TopicError::example("key 'success' missing"))?;

        let mut ops = Lines::titled("Operations:").line(format!("Index 'success': {}", success));
        filled.insert("notfound".to_string(), 404);
        ops = ops.line(format!("After Add: {:?}", filled));
        filled.remove("failed");
        ops = ops.line(format!("After Delete 'failed': {:?}", filled));

        Ok(Section::new(self.id(), self.title())
            .note("key-value pairs")
            .table(table)
            .lines(ops.line(UNORDERED_NOTE)))
    }
}

pub struct Records;

impl Topic for Records {
    fn id(&self) -> &'static str {
        "structures.records"
    }

    fn title(&self) -> &'static str {
        "STRUCTS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let empty_person = Person::default();
        let mut filled_person = Person::sample();

        let overview = Lines::new()
            .line(format!(
                "Default Struct: {:?} | Size: {} bytes",
                empty_person,
                size_of_val(&empty_person)
            ))
            .line(format!(
                "Filled Struct: {:?} | Size: {} bytes",
                filled_person,
                size_of_val(&filled_person)
            ));

        let mut ops = Lines::titled("Operations:")
            .line(format!("Field Access name: {}", filled_person.name))
            .line(format!("Nested Field Access address.city: {}", filled_person.address.city));

        filled_person.age = 31;
        ops = ops.line(format!("After Update age: {}", filled_person.age));
        filled_person.address.zip = 54321;
        ops = ops.line(format!("After Update address.zip: {}", filled_person.address.zip));

        Ok(Section::new(self.id(), self.title())
            .note("named fields grouped in one value")
            .lines(overview)
            .lines(ops))
    }
}

pub struct References;

impl Topic for References {
    fn id(&self) -> &'static str {
        "structures.references"
    }

    fn title(&self) -> &'static str {
        "REFERENCES"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let absent: Option<&i32> = None;
        let num = 42;
        let num_ref: &i32 = &num;
        let mut person = Person::sample();

        let shared = Rc::new(RefCell::new(42));
        let alias = Rc::clone(&shared);

        let table = Table::new(&[("Reference", 18), ("Target", 22), ("Size(bytes)", 11)])
            .row(cells!["Option<&i32>", format!("{:?}", absent), size_of_val(&absent)])
            .row(cells!["&i32", format!("&{}", num_ref), size_of_val(&num_ref)])
            .row(cells!["&Person", format!("&Person {}", person.name), size_of::<&Person>()])
            .row(cells!["Rc<RefCell<i32>>", format!("shared {}", shared.borrow()), size_of_val(&shared)]);

        let mut ops = Lines::titled("Operations:").line(format!("Dereference: *num_ref = {}", *num_ref));

        let mut counter = 42;
        {
            let exclusive = &mut counter;
            *exclusive = 100;
        }
        ops = ops.line(format!("After *exclusive = 100 through &mut: counter = {}", counter));

        *alias.borrow_mut() = 100;
        ops = ops.line(format!(
            "After write through alias: shared = {}, alias = {}, handles = {}",
            shared.borrow(),
            alias.borrow(),
            Rc::strong_count(&shared)
        ));

        let person_ref = &mut person;
        ops = ops.line(format!("Field via &mut Person: {}", person_ref.name));
        person_ref.name = "Jane Doe".to_string();
        ops = ops.line(format!("After Update via reference: person.name = {}", person.name));

        Ok(Section::new(self.id(), self.title())
            .note("borrowed and shared access")
            .table(table)
            .lines(ops.line(ctx.platform_note())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EmitContext {
        EmitContext::new("test")
    }

    #[test]
    fn test_array_sizes_and_update() {
        let section = FixedArrays.build(&ctx()).unwrap();
        let filled = section.find_row("[i32; 5] filled").unwrap();
        assert_eq!(filled.cell(1), Some("[2, 5, 7, 9, 11]"));
        assert_eq!(filled.cell(2), Some("5"));
        assert_eq!(filled.cell(3), Some("20"));
        let empty = section.find_row("[i32; 5] default").unwrap();
        assert_eq!(empty.cell(1), Some("[0, 0, 0, 0, 0]"));
        assert!(section.find_line("Index [0]: 2 | Index [2]: 7").is_some());
        assert!(section.find_line("[2, 100, 7, 9, 11]").is_some());
    }

    #[test]
    fn test_vector_len_and_capacity() {
        let section = Vectors.build(&ctx()).unwrap();
        let absent = section.find_row("Option<Vec> None").unwrap();
        assert_eq!(absent.cell(1), Some("None"));
        assert_eq!(absent.cell(2), Some("0"));

        let empty = section.find_row("Vec::new()").unwrap();
        assert_eq!(empty.cell(2), Some("0"));
        assert_eq!(empty.cell(3), Some("0"));

        let filled = section.find_row("vec![..] + push").unwrap();
        assert_eq!(filled.cell(2), Some("5"));
        let cap: usize = filled.cell(3).unwrap().parse().unwrap();
        assert!(cap >= 5);
    }

    #[test]
    fn test_vector_operations() {
        let section = Vectors.build(&ctx()).unwrap();
        assert!(section.find_line("Source Len: 5").is_some());
        assert!(section.find_line("Index [1]: is").is_some());
        assert!(section.find_line("Range [1..3]: [\"is\", \"a\"]").is_some());
        assert!(section.find_line("Range [..2]: [\"this\", \"is\"]").is_some());
        assert!(section
            .find_line("After Update [0]: [\"modified\", \"is\", \"a\", \"vector\", \"example\"]")
            .is_some());
    }

    #[test]
    fn test_maps_are_flagged_unordered() {
        assert!(!Maps.deterministic());
        let section = Maps.build(&ctx()).unwrap();
        assert_eq!(section.find_row("3 inserts").and_then(|r| r.cell(2)), Some("3"));
        assert!(section.find_line("Index 'success': 200").is_some());
        assert!(section.find_line(UNORDERED_NOTE).is_some());

        let after_delete = section.find_line("After Delete 'failed'").unwrap();
        assert!(!after_delete.contains("\"failed\""));
        assert!(after_delete.contains("\"notfound\": 404"));
    }

    #[test]
    fn test_record_field_updates() {
        let section = Records.build(&ctx()).unwrap();
        assert!(section.find_line("Field Access name: John Doe").is_some());
        assert!(section.find_line("address.city: Anytown").is_some());
        assert!(section.find_line("After Update age: 31").is_some());
        assert!(section.find_line("After Update address.zip: 54321").is_some());
        assert!(section
            .find_line(&format!("Size: {} bytes", size_of::<Person>()))
            .is_some());
    }

    #[test]
    fn test_person_default_is_zeroed() {
        let p = Person::default();
        assert_eq!(p.name, "");
        assert_eq!(p.age, 0);
        assert_eq!(p.address.zip, 0);
    }

    #[test]
    fn test_mutation_visible_through_aliases() {
        let section = References.build(&ctx()).unwrap();
        assert!(section.find_line("Dereference: *num_ref = 42").is_some());
        assert!(section.find_line("counter = 100").is_some());
        assert!(section
            .find_line("shared = 100, alias = 100, handles = 2")
            .is_some());
        assert!(section.find_line("person.name = Jane Doe").is_some());
        assert_eq!(
            section.find_row("&i32").and_then(|r| r.cell(2)),
            Some(size_of::<usize>().to_string().as_str())
        );
    }
}
