//! Debug-only sample division with a fixed demo member.
//!
//! Every loopback request resolves to the `sample` account, which makes the
//! whole resolution flow usable on a developer machine without seed data.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use chrono::NaiveDate;

use dormnet_accounting::{CreditEntry, TrafficRecord, Transaction};
use dormnet_core::{AccountId, DomainError, DomainResult, DormitoryId, TransactionId};
use dormnet_members::{Account, AccountStatus, AddressBook, Computer};

use crate::store::{InMemoryDivisionStore, StoreData};

use super::StoreBackend;

const SAMPLE_ACCOUNT: AccountId = AccountId::new(1);
const HOUSE_ACCOUNT: AccountId = AccountId::new(1000);
const LOOPBACK_V4: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const LOOPBACK_V6: IpAddr = IpAddr::V6(Ipv6Addr::LOCALHOST);

pub fn sample_data() -> DomainResult<StoreData> {
    let mut data = StoreData {
        accounts: vec![Account {
            id: SAMPLE_ACCOUNT,
            dormitory_id: DormitoryId::new(1),
            floor: 3,
            room: "301".to_string(),
            login: "sample".to_string(),
            status: AccountStatus::ACTIVE,
        }],
        ..StoreData::default()
    };

    for (mac, ip, hostname) in [
        ("aa:bb:cc:dd:ee:01", LOOPBACK_V4, "sample-v4"),
        ("aa:bb:cc:dd:ee:02", LOOPBACK_V6, "sample-v6"),
    ] {
        data.computers.push(Computer {
            owner: SAMPLE_ACCOUNT,
            mac: mac.to_string(),
            ip,
            hostname: hostname.to_string(),
            alias: None,
        });
    }

    data.credit.push(CreditEntry {
        account_id: SAMPLE_ACCOUNT,
        amount: 63 * 1024,
        timetag: 16_800,
    });

    for (day, input, output) in [(16_798, 1_200_000, 340_000), (16_799, 880_000, 120_000)] {
        data.traffic.push(TrafficRecord {
            timetag: day,
            ip: LOOPBACK_V4,
            input,
            output,
        });
    }

    let bookings = [
        (1, (2016, 4, 1), 2500, "Überweisung", SAMPLE_ACCOUNT, HOUSE_ACCOUNT),
        (2, (2016, 4, 2), 500, "Semesterbeitrag", HOUSE_ACCOUNT, SAMPLE_ACCOUNT),
    ];
    for (id, (y, m, d), amount, description, debit, credit) in bookings {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| DomainError::validation(format!("invalid booking date {y}-{m}-{d}")))?;
        data.transactions.push(Transaction::new(
            TransactionId::new(id),
            date,
            amount,
            Some(description.to_string()),
            debit,
            credit,
        )?);
    }

    Ok(data)
}

pub fn sample_backend() -> DomainResult<StoreBackend<Arc<InMemoryDivisionStore>>> {
    Ok(StoreBackend::new(
        "sample",
        Arc::new(InMemoryDivisionStore::from_data(sample_data()?)),
        AddressBook::standard(),
    ))
}
