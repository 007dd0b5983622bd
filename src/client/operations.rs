//! Public lookup operations.
//!
//! Each method validates its arguments, picks a resource path and query, and
//! hands off to the shared pipeline. Invalid arguments fail with
//! [`KenallError::InvalidArgument`](crate::KenallError::InvalidArgument)
//! before any request is sent.

use chrono::NaiveDate;

use super::fetch::{KenallClient, Query};
use super::validate;
use crate::context::RequestContext;
use crate::error::Result;
use crate::protocol::constants::{params, paths};
use crate::types::{
    AddressResponse, BusinessDayResponse, CityResponse, CorporationResponse, HolidayFilter,
    HolidaysResponse, NormalizeAddressResponse, WhoamiResponse,
};

impl KenallClient {
    /// Look up the addresses registered under a postal code.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Cancellation and deadline for this call
    /// * `postal_code` - Seven digits without hyphen, e.g. `"1008105"`
    pub async fn get_address(
        &self,
        ctx: &RequestContext,
        postal_code: &str,
    ) -> Result<AddressResponse> {
        let code = validate::postal_code(postal_code)?;
        let path = format!("{}{code}", paths::POSTAL_CODE);
        self.execute(ctx, &path, Query::new()).await
    }

    /// List the cities of a prefecture.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Cancellation and deadline for this call
    /// * `prefecture_code` - Two digit JIS prefecture code, e.g. `"13"`
    pub async fn get_city(
        &self,
        ctx: &RequestContext,
        prefecture_code: &str,
    ) -> Result<CityResponse> {
        let code = validate::prefecture_code(prefecture_code)?;
        let path = format!("{}{code}", paths::CITIES);
        self.execute(ctx, &path, Query::new()).await
    }

    /// Look up a corporation by its 13 digit corporate number.
    pub async fn get_corporation(
        &self,
        ctx: &RequestContext,
        corporate_number: &str,
    ) -> Result<CorporationResponse> {
        let number = validate::corporate_number(corporate_number)?;
        let path = format!("{}{number}", paths::HOUJIN_BANGOU);
        self.execute(ctx, &path, Query::new()).await
    }

    /// The caller's public address as seen by the service.
    pub async fn get_whoami(&self, ctx: &RequestContext) -> Result<WhoamiResponse> {
        self.execute(ctx, paths::WHOAMI, Query::new()).await
    }

    /// Every public holiday the service knows.
    pub async fn get_holidays(&self, ctx: &RequestContext) -> Result<HolidaysResponse> {
        self.get_holidays_filtered(ctx, HolidayFilter::All).await
    }

    /// Public holidays of one calendar year.
    ///
    /// A year without data yields an empty list, not an error.
    pub async fn get_holidays_by_year(
        &self,
        ctx: &RequestContext,
        year: i32,
    ) -> Result<HolidaysResponse> {
        self.get_holidays_filtered(ctx, HolidayFilter::Year(year)).await
    }

    /// Public holidays between `from` and `to`, both inclusive.
    pub async fn get_holidays_by_period(
        &self,
        ctx: &RequestContext,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HolidaysResponse> {
        self.get_holidays_filtered(ctx, HolidayFilter::Period { from, to })
            .await
    }

    /// Public holidays matching `filter`.
    ///
    /// `None` and [`HolidayFilter::All`] send the same unfiltered request.
    pub async fn get_holidays_filtered(
        &self,
        ctx: &RequestContext,
        filter: impl Into<HolidayFilter>,
    ) -> Result<HolidaysResponse> {
        let mut query = Query::new();
        match filter.into() {
            HolidayFilter::All => {}
            HolidayFilter::Year(year) => {
                query.insert(params::YEAR, year.to_string());
            }
            HolidayFilter::Period { from, to } => {
                query.insert(params::FROM, validate::period_bound(from)?);
                query.insert(params::TO, validate::period_bound(to)?);
            }
        }
        self.execute(ctx, paths::HOLIDAYS, query).await
    }

    /// Split a free-text address into its components.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Cancellation and deadline for this call
    /// * `address` - Address text, e.g. `"東京都千代田区麹町三丁目12-14"`; must not be blank
    pub async fn normalize_address(
        &self,
        ctx: &RequestContext,
        address: &str,
    ) -> Result<NormalizeAddressResponse> {
        let text = validate::address_text(address)?;
        let mut query = Query::new();
        query.insert(params::TEXT, text.to_string());
        self.execute(ctx, paths::POSTAL_CODE, query).await
    }

    /// Whether `date` is a business day or a legal holiday.
    ///
    /// `0001-01-01` counts as "no date" and is rejected, as are years past
    /// 9999.
    pub async fn check_business_day(
        &self,
        ctx: &RequestContext,
        date: NaiveDate,
    ) -> Result<BusinessDayResponse> {
        let mut query = Query::new();
        query.insert(params::DATE, validate::business_date(date)?);
        self.execute(ctx, paths::BUSINESS_DAYS_CHECK, query).await
    }
}
