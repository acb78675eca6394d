//! Entities used across tests.

use identity_values::entities::{Hero, Member, Product, Wand, Wizard};
use std::sync::Arc;

pub fn member_m001() -> Member {
    Member::new("M001", 500).expect("valid member fixture")
}

pub fn product_a001() -> Product {
    Product::new("A001", 980).expect("valid product fixture")
}

pub fn elder_wand(power: f64) -> Arc<Wand> {
    Arc::new(Wand::new("Elder", power).expect("valid wand fixture"))
}

pub fn merlin(wand: Arc<Wand>) -> Wizard {
    Wizard::new("Merlin", wand).expect("valid wizard fixture")
}

pub fn hero_with_hp(hp: i64) -> Hero {
    let mut hero = Hero::new("Minato").expect("valid hero fixture");
    hero.set_hp(hp).expect("non-negative fixture hp");
    hero
}
