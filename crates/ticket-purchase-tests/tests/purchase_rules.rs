use eyre::Result;
use ticket_purchase_core::PurchaseRejected;
use ticket_purchase_tests::TestCtxBuilder;
use util::{adult, child, infant};

mod util;

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_missing_account() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    let reason = ctx.api.purchase(None, &[]).await?.rejected()?;
    assert_eq!(reason, PurchaseRejected::InvalidAccount);
    assert_eq!(
        reason.to_string(),
        "Account id must be defined and be greater than 0"
    );
    assert!(ctx.calls.is_empty(), "Rejected purchases must not call any collaborator.");

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_invalid_account_before_other_checks() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    for account_id in [0, -1, i64::MIN] {
        let reason = ctx
            .api
            .purchase(Some(account_id), &[adult(1)])
            .await?
            .rejected()?;
        assert_eq!(reason, PurchaseRejected::InvalidAccount, "account id {account_id}");

        // Would violate every other rule, too.
        let reason = ctx
            .api
            .purchase(Some(account_id), &[infant(30)])
            .await?
            .rejected()?;
        assert_eq!(reason, PurchaseRejected::InvalidAccount, "account id {account_id}");
    }
    assert!(ctx.calls.is_empty());

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_no_ticket_requests() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    let reason = ctx.api.purchase(Some(1), &[]).await?.rejected()?;
    assert_eq!(reason, PurchaseRejected::NoTicketRequests);
    assert_eq!(reason.to_string(), "At least one ticket request must be specified");

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_no_adult_tickets() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    for requests in [
        vec![child(1), infant(1)],
        vec![child(3)],
        vec![adult(0), child(1)],
        vec![adult(0)],
        vec![infant(30)],
    ] {
        let reason = ctx.api.purchase(Some(1), &requests).await?.rejected()?;
        assert_eq!(reason, PurchaseRejected::NoAdultTickets, "{requests:?}");
        assert_eq!(
            reason.to_string(),
            "Tickets can not be purchased without an adult ticket"
        );
    }
    assert!(ctx.calls.is_empty(), "Rejected purchases must not call any collaborator.");

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_infants_exceeding_adults() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    let reason = ctx
        .api
        .purchase(Some(1), &[infant(2), adult(1)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::NotEnoughAdults);
    assert_eq!(reason.to_string(), "There are not enough adults for infants to sit on");

    // Checked before the ticket limit.
    let reason = ctx
        .api
        .purchase(Some(1), &[adult(1), infant(25)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::NotEnoughAdults);

    // Infants spread over several lines are summed up.
    let reason = ctx
        .api
        .purchase(Some(1), &[adult(2), infant(1), infant(1), infant(1)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::NotEnoughAdults);
    assert!(ctx.calls.is_empty());

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn accept_one_infant_per_adult() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    ctx.api
        .purchase(Some(3), &[adult(2), infant(2)])
        .await?
        .result?;
    assert_eq!(ctx.calls.payments(), [(3, 40)]);
    assert_eq!(ctx.calls.reservations(), [(3, 2)]);

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn reject_more_than_maximum_tickets() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    let reason = ctx.api.purchase(Some(1), &[adult(21)]).await?.rejected()?;
    assert_eq!(reason, PurchaseRejected::TooManyTickets { max: 20 });
    assert_eq!(reason.to_string(), "Number of tickets to purchase exceeds 20");

    // The limit applies to all lines and types together.
    let reason = ctx
        .api
        .purchase(Some(1), &[adult(10), adult(10), child(1)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::TooManyTickets { max: 20 });

    let reason = ctx
        .api
        .purchase(Some(1), &[adult(u32::MAX), adult(u32::MAX)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::TooManyTickets { max: 20 });
    assert!(ctx.calls.is_empty());

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn accept_maximum_tickets() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?.build().await?;

    ctx.api.purchase(Some(1), &[adult(20)]).await?.result?;
    ctx.api
        .purchase(Some(2), &[adult(10), adult(5), child(3), infant(2)])
        .await?
        .result?;
    assert_eq!(ctx.calls.payments(), [(1, 400), (2, 330)]);
    assert_eq!(ctx.calls.reservations(), [(1, 20), (2, 18)]);

    ctx.finish().await;
    Ok(())
}

#[tokio::test]
#[ntest::timeout(10_000)]
async fn configured_maximum_tickets() -> Result<()> {
    let ctx = TestCtxBuilder::from_env()?
        .with_max_tickets(5)
        .build()
        .await?;

    let reason = ctx
        .api
        .purchase(Some(1), &[adult(3), child(3)])
        .await?
        .rejected()?;
    assert_eq!(reason, PurchaseRejected::TooManyTickets { max: 5 });
    assert_eq!(reason.to_string(), "Number of tickets to purchase exceeds 5");

    ctx.api
        .purchase(Some(1), &[adult(3), child(2)])
        .await?
        .result?;
    assert_eq!(ctx.service().config().max_tickets, 5);

    ctx.finish().await;
    Ok(())
}
