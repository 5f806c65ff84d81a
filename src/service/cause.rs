use sea_orm::DatabaseConnection;

use crate::{
    data::{CauseRepository, EventRepository, NgoRepository},
    error::Error,
    model::api::{CauseDetailDto, CauseSummaryDto, CauseType, LocationDto},
};

pub struct CauseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CauseService<'a> {
    /// Creates a new instance of [`CauseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every verified cause as a flattened summary object
    pub async fn list_public(&self) -> Result<Vec<CauseSummaryDto>, Error> {
        let cause_repository = CauseRepository::new(self.db);
        let causes = cause_repository.get_verified().await?;

        let mut summaries = Vec::with_capacity(causes.len());
        for cause in causes {
            let locations = cause_repository.locations(cause.cause_id).await?;
            summaries.push(self.build_summary(cause, &locations).await?);
        }

        Ok(summaries)
    }

    /// Gets the detail view of a verified cause, with the full location list.
    ///
    /// Unverified causes are not publicly visible, so both a missing and an
    /// unverified cause surface as not found.
    pub async fn get_detail(&self, cause_id: i32) -> Result<CauseDetailDto, Error> {
        let cause_repository = CauseRepository::new(self.db);

        let cause = cause_repository
            .get_by_id(cause_id)
            .await?
            .ok_or(Error::NotFound("cause"))?;

        if !cause.verified {
            return Err(Error::NotFound("cause"));
        }

        let locations = cause_repository.locations(cause.cause_id).await?;
        let summary = self.build_summary(cause, &locations).await?;

        let locations = locations
            .into_iter()
            .map(|l| LocationDto {
                loc_id: l.loc_id,
                country: l.country,
                city: l.city,
                address: l.address,
                contact_no: l.contact_no,
                latitude: l.latitude,
                longitude: l.longitude,
            })
            .collect();

        Ok(CauseDetailDto { summary, locations })
    }

    /// Flattens a cause row, its subtype fields, and its related strings
    /// into one summary object. The first location is the representative one
    /// for the coordinate fields.
    async fn build_summary(
        &self,
        cause: entity::cause::Model,
        locations: &[entity::location::Model],
    ) -> Result<CauseSummaryDto, Error> {
        let cause_repository = CauseRepository::new(self.db);

        let ngo = NgoRepository::new(self.db)
            .get_by_cause_id(cause.cause_id)
            .await?;
        let event = EventRepository::new(self.db)
            .get_by_cause_id(cause.cause_id)
            .await?;

        let contacts = cause_repository.contacts(cause.cause_id).await?;
        let socials = cause_repository.socials(cause.cause_id).await?;

        let (latitude, longitude) = locations
            .first()
            .map(|l| (l.latitude, l.longitude))
            .unwrap_or((None, None));

        let cause_type = if ngo.is_some() {
            CauseType::Ngo
        } else if event.is_some() {
            CauseType::Event
        } else {
            CauseType::Unknown
        };

        Ok(CauseSummaryDto {
            cause_id: cause.cause_id,
            name: cause.name,
            description: cause.description,
            logo: cause.logo,
            email: cause.email,
            if_online: cause.if_online,
            cause_type,
            latitude,
            longitude,
            contacts,
            socials,
            year_est: ngo.as_ref().and_then(|n| n.year_est),
            age: ngo.as_ref().and_then(|n| n.age),
            date: event.as_ref().and_then(|e| e.date),
            time: event.as_ref().and_then(|e| e.time),
            capacity: event.as_ref().and_then(|e| e.capacity),
            ngo_id: event.as_ref().and_then(|e| e.ngo_id),
        })
    }
}
