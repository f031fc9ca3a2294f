use alloy::sol;

sol! {
    #[sol(rpc, all_derives, bytecode = "0x6080604052348015600f57600080fd5b50336000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff160217905550603f80601d6000396000f3fe6080604052600080fdfea264697066735822122083f1a1938f6b4bfa8e3c0f2e6f0f3d1c2b4a5968778695a4b3c2d1e0f1a2b3c464736f6c634300081a0033")]
    contract Market {
        struct MarketItem {
            uint256 itemId;
            address nftContract;
            uint256 tokenId;
            address seller;
            address owner;
            uint256 price;
            bool sold;
        }

        event MarketItemCreated(
            uint256 indexed itemId,
            address indexed nftContract,
            uint256 indexed tokenId,
            address seller,
            address owner,
            uint256 price,
            bool sold
        );

        function getListingPrice() external view returns (uint256);
        function createMarketItem(address nftContract, uint256 tokenId, uint256 price) external payable;
        function createMarketSale(address nftContract, uint256 itemId) external payable;
        function fetchMarketItems() external view returns (MarketItem[] memory);
        function fetchMyNFTs() external view returns (MarketItem[] memory);
        function fetchItemsCreated() external view returns (MarketItem[] memory);
    }
}
