//! [`House`]-related [`Database`] operations.

use common::{
    operations::{By, Delete, Insert, Select, Update},
    pagination,
};
use tracerr::Traced;

use crate::{
    domain::{
        house::{self, discount},
        House,
    },
    infra::database::{self, memory, Database},
    read,
};

use super::{super::Memory, paginate};

impl Database<Insert<House>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(house): Insert<House>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        drop(state.houses.insert(house.id, house));
        Ok(())
    }
}

impl Database<Update<House>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(house): Update<House>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = house.id;
        let mut state = self.state.write().await;
        let doc = state.houses.get_mut(&id).ok_or_else(|| {
            tracerr::new!(database::Error::Memory(
                memory::Error::HouseNotExists(id),
            ))
        })?;
        *doc = house;
        Ok(())
    }
}

impl Database<Select<By<Option<House>, house::Id>>> for Memory {
    type Ok = Option<House>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<House>, house::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.houses.get(&by.into_inner()).cloned())
    }
}

impl Database<Select<By<read::house::list::Page, read::house::list::Selector>>>
    for Memory
{
    type Ok = read::house::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::house::list::Page, read::house::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let pagination::Selector { arguments, filter } = by.into_inner();

        let state = self.state.read().await;
        let name = filter
            .name
            .as_ref()
            .map(|n| AsRef::<str>::as_ref(n).to_lowercase());
        Ok(paginate(
            &arguments,
            state
                .houses
                .values()
                .filter(|h| {
                    name.as_ref().is_none_or(|n| {
                        AsRef::<str>::as_ref(&h.name).to_lowercase().contains(n)
                    })
                })
                .map(|h| h.id),
        ))
    }
}

impl Database<Select<By<read::house::list::TotalCount, ()>>> for Memory {
    type Ok = read::house::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::house::list::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(i32::try_from(state.houses.len()).unwrap_or(i32::MAX).into())
    }
}

impl Database<Delete<By<house::Discount, discount::EndDateTime>>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<house::Discount, discount::EndDateTime>>,
    ) -> Result<Self::Ok, Self::Err> {
        let deadline = by.into_inner();
        let mut state = self.state.write().await;
        for house in state.houses.values_mut() {
            let expired = house
                .discount
                .as_ref()
                .and_then(|d| d.ends_at)
                .is_some_and(|at| at < deadline);
            if expired {
                house.discount = None;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        money::Currency,
        operations::{By, Delete, Insert, Select, Update},
        pagination, DateTime, Money,
    };
    use rust_decimal::Decimal;

    use crate::{
        domain::{
            house::{self, discount, Discount},
            House,
        },
        infra::{database::Database as _, Memory},
        read,
    };

    fn mnt(amount: i64) -> Money {
        Money {
            amount: Decimal::from(amount),
            currency: Currency::Mnt,
        }
    }

    fn house(name: &str) -> House {
        House {
            id: house::Id::new(),
            name: house::Name::new(name).unwrap(),
            price: mnt(100_000),
            discount: None,
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn inserts_and_selects_by_id() {
        let db = Memory::default();
        let house = house("Juniper cabin");

        db.execute(Insert(house.clone())).await.unwrap();

        let selected: Option<House> = db
            .execute(Select(By::new(house.id)))
            .await
            .unwrap();
        assert_eq!(selected.unwrap().id, house.id);

        let missing: Option<House> = db
            .execute(Select(By::new(house::Id::new())))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn updates_existing_only() {
        let db = Memory::default();
        let mut house = house("Juniper cabin");

        assert!(db.execute(Update(house.clone())).await.is_err());

        db.execute(Insert(house.clone())).await.unwrap();
        house.price = mnt(120_000);
        db.execute(Update(house.clone())).await.unwrap();

        let selected: Option<House> =
            db.execute(Select(By::new(house.id))).await.unwrap();
        assert_eq!(selected.unwrap().price, mnt(120_000));
    }

    #[tokio::test]
    async fn lists_filtered_by_name() {
        let db = Memory::default();
        db.execute(Insert(house("Juniper cabin"))).await.unwrap();
        db.execute(Insert(house("Pine lodge"))).await.unwrap();
        db.execute(Insert(house("Juniper lodge"))).await.unwrap();

        let page: read::house::list::Page = db
            .execute(Select(By::new(pagination::Selector {
                arguments: pagination::Arguments::Forward {
                    first: 10,
                    after: None,
                    including: false,
                },
                filter: read::house::list::Filter {
                    name: house::Name::new("juniper"),
                },
            })))
            .await
            .unwrap();
        assert_eq!(page.edges.len(), 2);
        assert!(!page.has_more);

        let count = db
            .execute(Select(By::<read::house::list::TotalCount, _>::new(())))
            .await
            .unwrap();
        assert_eq!(i32::from(count), 3);
    }

    #[tokio::test]
    async fn deletes_expired_discounts_only() {
        let db = Memory::default();

        let expired_at: discount::EndDateTime =
            DateTime::from_rfc3339("2024-06-01T00:00:00Z").unwrap().coerce();
        let discount = |ends_at| Discount {
            price: mnt(70_000),
            is_active: true,
            starts_at: None,
            ends_at,
            valid_days: discount::ValidDays::default(),
            label: None,
        };

        let mut expired = house("Expired");
        expired.discount = Some(discount(Some(expired_at)));
        let mut unbounded = house("Unbounded");
        unbounded.discount = Some(discount(None));
        db.execute(Insert(expired.clone())).await.unwrap();
        db.execute(Insert(unbounded.clone())).await.unwrap();

        db.execute(Delete(By::<house::Discount, _>::new(
            DateTime::from_rfc3339("2024-07-01T00:00:00Z")
                .unwrap()
                .coerce::<(Discount, common::unit::End)>(),
        )))
        .await
        .unwrap();

        let expired: Option<House> =
            db.execute(Select(By::new(expired.id))).await.unwrap();
        assert!(expired.unwrap().discount.is_none());

        let unbounded: Option<House> =
            db.execute(Select(By::new(unbounded.id))).await.unwrap();
        assert!(unbounded.unwrap().discount.is_some());
    }
}
