use crate::{
    model::modding::{ModdingPageDto, PaginationDto},
    server::{
        model::{modding::ModdingContext, search::SearchParams},
        util::url::UrlBuilder,
    },
};

/// One page of search results with the un-paged total.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, params: &SearchParams) -> Self {
        Self {
            items,
            total,
            per_page: params.limit,
            current_page: params.page,
        }
    }

    /// Last page number, at least 1 even for empty results.
    pub fn last_page(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    /// 1-based position of the first item on this page.
    pub fn from(&self) -> Option<u64> {
        (!self.items.is_empty()).then(|| {
            (self.current_page - 1)
                .saturating_mul(self.per_page)
                .saturating_add(1)
        })
    }

    /// 1-based position of the last item on this page.
    pub fn to(&self) -> Option<u64> {
        self.from().map(|from| from + self.items.len() as u64 - 1)
    }
}

/// A paginated tab of a user's modding history.
pub struct ModdingPage<T> {
    pub context: ModdingContext,
    pub results: Paginated<T>,
}

impl<T> ModdingPage<T> {
    /// Converts the page to its view-model, mapping each item with `convert`.
    ///
    /// Page links keep the normalized search parameters.
    pub fn into_dto<D>(
        self,
        urls: &UrlBuilder,
        convert: impl FnMut(T) -> D,
    ) -> ModdingPageDto<D> {
        let ModdingPage { context, results } = self;
        let last_page = results.last_page();

        let page_url = |page: u64| {
            let mut params = context.params.clone();
            params.page = page;
            urls.modding(context.user.id, context.action, &params.to_query_pairs())
        };

        let pagination = PaginationDto {
            total: results.total,
            per_page: results.per_page,
            current_page: results.current_page,
            last_page,
            from: results.from(),
            to: results.to(),
            next_page_url: (results.current_page < last_page)
                .then(|| page_url(results.current_page + 1)),
            prev_page_url: (results.current_page > 1).then(|| page_url(results.current_page - 1)),
        };

        ModdingPageDto {
            items: results.items.into_iter().map(convert).collect(),
            pagination,
            search: context.params.to_dto(),
            user: context.user.to_compact_dto(false),
            show_user_search: context.action.shows_user_search(),
        }
    }
}
