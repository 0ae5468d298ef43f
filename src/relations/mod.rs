//! Witness relations: the relation type and the Armstrong relation computers.

mod armstrong_tables;
pub use armstrong_tables::ArmstrongConstruction;
pub use armstrong_tables::ArmstrongTables;

mod regular_armstrong;
pub use regular_armstrong::RegularArmstrongComputer;
pub use regular_armstrong::SymbolicGroup;
pub use regular_armstrong::SymbolicRelation;

mod relation;
pub use relation::Relation;
pub use relation::ValueType;

mod relational_product;
pub use relational_product::direct_product;
pub use relational_product::RelationalProductComputer;

mod specs;
pub use specs::ArmstrongRelationComputer;

mod strong_armstrong;
pub use strong_armstrong::StrongArmstrongComputer;
