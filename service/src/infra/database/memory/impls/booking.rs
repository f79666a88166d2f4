//! [`Booking`]-related [`Database`] operations.

use common::{
    operations::{By, Delete, Insert, Select},
    pagination,
};
use tracerr::Traced;

use crate::{
    domain::{booking, Booking},
    infra::database::{self, Database},
    read,
};

use super::{super::Memory, paginate};

impl Database<Insert<Booking>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        drop(state.bookings.insert(booking.id, booking));
        Ok(())
    }
}

impl Database<Select<By<Option<Booking>, booking::Id>>> for Memory {
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(state.bookings.get(&by.into_inner()).cloned())
    }
}

impl Database<Delete<By<Booking, booking::Id>>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Booking, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.write().await;
        drop(state.bookings.remove(&by.into_inner()));
        Ok(())
    }
}

impl
    Database<
        Select<By<read::booking::list::Page, read::booking::list::Selector>>,
    > for Memory
{
    type Ok = read::booking::list::Page;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::booking::list::Page, read::booking::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let pagination::Selector { arguments, filter } = by.into_inner();

        let state = self.state.read().await;
        Ok(paginate(
            &arguments,
            state
                .bookings
                .values()
                .filter(|b| {
                    filter.house_id.is_none_or(|id| b.house_id == id)
                })
                .map(|b| b.id),
        ))
    }
}

impl Database<Select<By<read::booking::list::TotalCount, ()>>> for Memory {
    type Ok = read::booking::list::TotalCount;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<read::booking::list::TotalCount, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let state = self.state.read().await;
        Ok(i32::try_from(state.bookings.len())
            .unwrap_or(i32::MAX)
            .into())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        money::Currency,
        operations::{By, Delete, Insert, Select},
        pagination, DateTime, Money,
    };
    use rust_decimal::Decimal;

    use crate::{
        domain::{booking, house, Booking},
        infra::{database::Database as _, Memory},
        read,
    };

    fn booking(house_id: house::Id) -> Booking {
        Booking {
            id: booking::Id::new(),
            house_id,
            guest_name: booking::GuestName::new("Bat-Erdene").unwrap(),
            guest_phone: booking::GuestPhone::new("99112233").unwrap(),
            check_in: DateTime::from_rfc3339("2024-06-10T14:00:00Z")
                .unwrap()
                .coerce(),
            check_out: DateTime::from_rfc3339("2024-06-13T14:00:00Z")
                .unwrap()
                .coerce(),
            total_price: Money {
                amount: Decimal::from(300_000),
                currency: Currency::Mnt,
            },
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn deletes_are_idempotent() {
        let db = Memory::default();
        let booking = booking(house::Id::new());

        db.execute(Insert(booking.clone())).await.unwrap();
        db.execute(Delete(By::<Booking, _>::new(booking.id)))
            .await
            .unwrap();
        db.execute(Delete(By::<Booking, _>::new(booking.id)))
            .await
            .unwrap();

        let selected: Option<Booking> =
            db.execute(Select(By::new(booking.id))).await.unwrap();
        assert!(selected.is_none());
    }

    #[tokio::test]
    async fn lists_filtered_by_house() {
        let db = Memory::default();
        let house_id = house::Id::new();

        db.execute(Insert(booking(house_id))).await.unwrap();
        db.execute(Insert(booking(house_id))).await.unwrap();
        db.execute(Insert(booking(house::Id::new()))).await.unwrap();

        let page: read::booking::list::Page = db
            .execute(Select(By::new(pagination::Selector {
                arguments: pagination::Arguments::Forward {
                    first: 10,
                    after: None,
                    including: false,
                },
                filter: read::booking::list::Filter {
                    house_id: Some(house_id),
                },
            })))
            .await
            .unwrap();
        assert_eq!(page.edges.len(), 2);

        let count = db
            .execute(Select(By::<read::booking::list::TotalCount, _>::new(())))
            .await
            .unwrap();
        assert_eq!(i32::from(count), 3);
    }
}
