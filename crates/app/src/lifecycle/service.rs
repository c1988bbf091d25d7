//! Lifecycle service.

use std::sync::Arc;

use async_trait::async_trait;
use has_one_product::prelude::{RULE_SYSTEM_NAME, settings_key};
use mockall::automock;
use tracing::info;

use crate::{
    domain::{
        discounts::DiscountsRepository,
        locales::{
            LocaleResourcesRepository,
            resources::{RESOURCE_PREFIX, RESOURCES},
        },
        settings::SettingsStore,
    },
    lifecycle::{
        errors::LifecycleError,
        models::{InstallReport, UninstallReport},
    },
};

#[derive(Clone)]
pub struct HasOneProductLifecycle {
    settings: Arc<dyn SettingsStore>,
    discounts: Arc<dyn DiscountsRepository>,
    locales: Arc<dyn LocaleResourcesRepository>,
}

impl HasOneProductLifecycle {
    #[must_use]
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        discounts: Arc<dyn DiscountsRepository>,
        locales: Arc<dyn LocaleResourcesRepository>,
    ) -> Self {
        Self {
            settings,
            discounts,
            locales,
        }
    }
}

#[async_trait]
impl LifecycleService for HasOneProductLifecycle {
    #[tracing::instrument(name = "lifecycle.install", skip(self), err)]
    async fn install(&self) -> Result<InstallReport, LifecycleError> {
        for resource in RESOURCES {
            self.locales
                .upsert_resource(resource.name, resource.value)
                .await?;
        }

        info!(resources = RESOURCES.len(), "installed display strings");

        Ok(InstallReport {
            resources_installed: RESOURCES.len(),
        })
    }

    #[tracing::instrument(name = "lifecycle.uninstall", skip(self), err)]
    async fn uninstall(&self) -> Result<UninstallReport, LifecycleError> {
        let requirements = self
            .discounts
            .list_requirements_by_system_name(RULE_SYSTEM_NAME)
            .await?;

        let mut report = UninstallReport {
            requirements_removed: 0,
            settings_removed: 0,
            resources_removed: 0,
        };

        // Requirement first: one left behind without its setting would admit every cart.
        for requirement in requirements {
            report.requirements_removed += self.discounts.delete_requirement(requirement.id).await?;

            report.settings_removed += self
                .settings
                .delete_setting(&settings_key(requirement.id))
                .await?;
        }

        report.resources_removed = self.locales.delete_resources(RESOURCE_PREFIX).await?;

        info!(
            requirements = report.requirements_removed,
            settings = report.settings_removed,
            resources = report.resources_removed,
            "uninstalled rule"
        );

        Ok(report)
    }
}

#[automock]
#[async_trait]
pub trait LifecycleService: Send + Sync {
    /// Register the rule's display strings. Safe to run repeatedly.
    async fn install(&self) -> Result<InstallReport, LifecycleError>;

    /// Remove the rule's requirements, their settings and its display strings.
    async fn uninstall(&self) -> Result<UninstallReport, LifecycleError>;
}

#[cfg(test)]
mod tests {
    use has_one_product::prelude::{DiscountId, RequirementId};
    use mockall::Sequence;
    use sqlx::Error;
    use testresult::TestResult;

    use crate::{
        domain::{
            RepositoryError,
            discounts::{MockDiscountsRepository, models::DiscountRequirement},
            locales::MockLocaleResourcesRepository,
            settings::MockSettingsStore,
        },
        test::{strict_discounts_mock, strict_locales_mock, strict_settings_mock},
    };

    use super::*;

    fn lifecycle(
        settings: MockSettingsStore,
        discounts: MockDiscountsRepository,
        locales: MockLocaleResourcesRepository,
    ) -> HasOneProductLifecycle {
        HasOneProductLifecycle::new(Arc::new(settings), Arc::new(discounts), Arc::new(locales))
    }

    #[tokio::test]
    async fn install_upserts_every_resource() -> TestResult {
        let mut locales = MockLocaleResourcesRepository::new();

        locales
            .expect_upsert_resource()
            .times(RESOURCES.len())
            .withf(|name, value| {
                RESOURCES
                    .iter()
                    .any(|resource| resource.name == name && resource.value == value)
            })
            .returning(|_, _| Ok(()));

        locales.expect_delete_resources().never();

        let lifecycle = lifecycle(strict_settings_mock(), strict_discounts_mock(), locales);

        let report = lifecycle.install().await?;

        assert_eq!(report.resources_installed, RESOURCES.len());

        Ok(())
    }

    #[tokio::test]
    async fn install_reports_storage_failure() {
        let mut locales = MockLocaleResourcesRepository::new();

        locales
            .expect_upsert_resource()
            .once()
            .returning(|_, _| Err(RepositoryError::Sql(Error::PoolClosed)));

        let lifecycle = lifecycle(strict_settings_mock(), strict_discounts_mock(), locales);

        let result = lifecycle.install().await;

        assert!(
            matches!(result, Err(LifecycleError::Storage(_))),
            "expected storage error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn uninstall_removes_requirements_settings_and_resources() -> TestResult {
        let mut sequence = Sequence::new();
        let mut discounts = MockDiscountsRepository::new();
        let mut settings = MockSettingsStore::new();
        let mut locales = MockLocaleResourcesRepository::new();

        discounts
            .expect_list_requirements_by_system_name()
            .once()
            .in_sequence(&mut sequence)
            .withf(|system_name| system_name == RULE_SYSTEM_NAME)
            .return_once(|system_name| {
                Ok([3, 8]
                    .into_iter()
                    .map(|id| DiscountRequirement {
                        id: RequirementId::new(id),
                        discount: DiscountId::new(1),
                        system_name: system_name.to_owned(),
                    })
                    .collect())
            });

        for (id, key, stored) in [
            (3, "DiscountRequirement.RestrictedProductIds-3", 1),
            (8, "DiscountRequirement.RestrictedProductIds-8", 0),
        ] {
            discounts
                .expect_delete_requirement()
                .once()
                .in_sequence(&mut sequence)
                .withf(move |requirement| *requirement == RequirementId::new(id))
                .return_once(|_| Ok(1));

            settings
                .expect_delete_setting()
                .once()
                .in_sequence(&mut sequence)
                .withf(move |candidate| candidate == key)
                .return_once(move |_| Ok(stored));
        }

        locales
            .expect_delete_resources()
            .once()
            .in_sequence(&mut sequence)
            .withf(|prefix| prefix == RESOURCE_PREFIX)
            .return_once(|_| Ok(4));

        let lifecycle = lifecycle(settings, discounts, locales);

        let report = lifecycle.uninstall().await?;

        assert_eq!(
            report,
            UninstallReport {
                requirements_removed: 2,
                settings_removed: 1,
                resources_removed: 4,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn uninstall_without_requirements_still_removes_resources() -> TestResult {
        let mut discounts = MockDiscountsRepository::new();

        discounts
            .expect_list_requirements_by_system_name()
            .once()
            .return_once(|_| Ok(Vec::new()));

        discounts.expect_delete_requirement().never();

        let mut locales = MockLocaleResourcesRepository::new();

        locales
            .expect_delete_resources()
            .once()
            .return_once(|_| Ok(0));

        let lifecycle = lifecycle(strict_settings_mock(), discounts, locales);

        let report = lifecycle.uninstall().await?;

        assert_eq!(report.requirements_removed, 0);
        assert_eq!(report.resources_removed, 0);

        Ok(())
    }

    #[tokio::test]
    async fn uninstall_keeps_settings_of_requirement_it_failed_to_remove() {
        let mut discounts = MockDiscountsRepository::new();

        discounts
            .expect_list_requirements_by_system_name()
            .once()
            .return_once(|system_name| {
                Ok(vec![DiscountRequirement {
                    id: RequirementId::new(3),
                    discount: DiscountId::new(1),
                    system_name: system_name.to_owned(),
                }])
            });

        discounts
            .expect_delete_requirement()
            .once()
            .return_once(|_| Err(RepositoryError::Sql(Error::PoolClosed)));

        let lifecycle = lifecycle(strict_settings_mock(), discounts, strict_locales_mock());

        let result = lifecycle.uninstall().await;

        assert!(
            matches!(result, Err(LifecycleError::Storage(_))),
            "expected storage error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn uninstall_stops_on_list_failure() {
        let mut discounts = MockDiscountsRepository::new();

        discounts
            .expect_list_requirements_by_system_name()
            .once()
            .return_once(|_| Err(RepositoryError::Sql(Error::PoolTimedOut)));

        let lifecycle = lifecycle(strict_settings_mock(), discounts, strict_locales_mock());

        let result = lifecycle.uninstall().await;

        assert!(
            matches!(result, Err(LifecycleError::Storage(_))),
            "expected storage error, got {result:?}"
        );
    }
}
