use tracing::instrument;

use playdeck_core::Pagination;

use crate::metrics::track_tags_recorded;
use crate::modules::tags::model::{PopularTagsResponse, RecordTagsDto, RecordTagsResponse};
use crate::modules::tags::store::TagStore;

pub struct TagService;

impl TagService {
    #[instrument(skip(store))]
    pub async fn record_tags(store: &TagStore, dto: RecordTagsDto) -> RecordTagsResponse {
        let recorded = store.record(&dto.tags).await;
        track_tags_recorded(recorded);

        RecordTagsResponse { recorded }
    }

    #[instrument(skip(store))]
    pub async fn get_popular_tags(store: &TagStore, pagination: Pagination) -> PopularTagsResponse {
        let ranked = store.ranked().await;
        let total = i64::try_from(ranked.len()).unwrap_or(i64::MAX);
        let data = ranked[pagination.window(ranked.len())].to_vec();

        PopularTagsResponse {
            data,
            meta: pagination.meta(total),
        }
    }
}
