use crate::models::{Buyer, Property};

/// Check whether a property and a buyer may be matched at all
///
/// The budget is the only hard constraint: a pair is compatible iff the
/// property's price does not exceed the buyer's budget. Tag overlap never
/// disqualifies a pair.
#[inline]
pub fn is_compatible(property: &Property, buyer: &Buyer) -> bool {
    property.price <= buyer.budget
}

/// Buyers from `buyers` that can afford `property`, in input order
pub fn affordable_buyers(
    property: &Property,
    buyers: Vec<Buyer>,
) -> impl Iterator<Item = Buyer> + '_ {
    buyers
        .into_iter()
        .filter(move |buyer| is_compatible(property, buyer))
}

/// Properties from `properties` within `buyer`'s budget, in input order
pub fn affordable_properties(
    buyer: &Buyer,
    properties: Vec<Property>,
) -> impl Iterator<Item = Property> + '_ {
    properties
        .into_iter()
        .filter(move |property| is_compatible(property, buyer))
}
